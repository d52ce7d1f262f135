use crate::entities::{
    ApplicantType, AssetType, BasicInfo, CapitalZone, Case, CorpSize, DeductionItem,
    EmploymentYear, FinancialSummary, FinancialSupplement, RdMethod, RdType, TaxType, YearType,
    ZoneType,
};

/// Corporate (법인) scenarios.
pub static CORPORATE_CASES: [Case; 10] = [
    Case {
        id: "TC-CORP-01",
        title: "중소기업_고용증대_세액공제",
        desc: "수도권 외 중소기업이 청년 고용을 늘려 고용증대 세액공제를 신청하는 기본 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 한빛테크",
            biz_reg_no: "123-45-67890",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "62010",
            hq_location: "대전광역시 유성구 대학로 99",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 5_000_000_000,
            taxable_income: 800_000_000,
            computed_tax: 152_000_000,
            paid_tax: 152_000_000,
            founding_date: "2018-03-15",
            venture_yn: false,
            rd_dept_yn: true,
            claim_reason: "고용증대 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                45.0,
                [12, 1, 2, 0, 0, 30, 3],
                2_700_000_000,
                270_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                38.0,
                [8, 1, 2, 0, 0, 27, 2],
                2_200_000_000,
                220_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::NonCapital)],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 50_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 70_000_000,
            withholding_tax: 5_000_000,
            determined_tax: 152_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-02",
        title: "중소기업_RD_세액공제_신성장원천",
        desc: "중소기업이 신성장·원천기술 R&D 세액공제를 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 바이오젠",
            biz_reg_no: "234-56-78901",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "21100",
            hq_location: "경기도 성남시 분당구 판교로 123",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 12_000_000_000,
            taxable_income: 2_000_000_000,
            computed_tax: 400_000_000,
            paid_tax: 400_000_000,
            founding_date: "2015-07-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "R&D 세액공제 경정청구 (신성장원천기술)",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                80.0,
                [25, 0, 3, 1, 0, 51, 5],
                6_000_000_000,
                600_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                75.0,
                [22, 0, 3, 0, 0, 50, 4],
                5_500_000_000,
                550_000_000,
            ),
        ],
        deductions: &[DeductionItem::rd(
            "2024",
            3_000_000_000,
            RdType::NewGrowth,
            RdMethod::Increment,
        )],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 100_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 180_000_000,
            withholding_tax: 10_000_000,
            determined_tax: 400_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-03",
        title: "중소기업_투자세액공제",
        desc: "중소기업이 생산설비 투자에 대한 세액공제를 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 대한정밀",
            biz_reg_no: "345-67-89012",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "29199",
            hq_location: "충청남도 천안시 서북구 공단1로 50",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 8_000_000_000,
            taxable_income: 1_200_000_000,
            computed_tax: 228_000_000,
            paid_tax: 228_000_000,
            founding_date: "2010-05-20",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "생산설비 투자세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                60.0,
                [15, 2, 5, 0, 0, 38, 4],
                3_600_000_000,
                360_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                58.0,
                [14, 2, 5, 0, 0, 37, 3],
                3_400_000_000,
                340_000_000,
            ),
        ],
        deductions: &[DeductionItem::investment(
            "2024",
            2_000_000_000,
            ZoneType::NonCapital,
            AssetType::Facility,
        )],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 30_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 100_000_000,
            withholding_tax: 8_000_000,
            determined_tax: 228_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-04",
        title: "중견기업_복합세액공제",
        desc: "중견기업이 고용증대 + R&D + 투자 세액공제를 복합 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 세종일렉트로닉스",
            biz_reg_no: "456-78-90123",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Medium,
            industry_code: "26410",
            hq_location: "경기도 화성시 동탄산단1길 30",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 50_000_000_000,
            taxable_income: 5_000_000_000,
            computed_tax: 1_100_000_000,
            paid_tax: 1_100_000_000,
            founding_date: "2005-01-10",
            venture_yn: false,
            rd_dept_yn: true,
            claim_reason: "고용증대·R&D·투자 복합 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                350.0,
                [80, 5, 20, 3, 0, 242, 15],
                28_000_000_000,
                2_800_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                320.0,
                [65, 5, 18, 2, 0, 230, 12],
                25_000_000_000,
                2_500_000_000,
            ),
        ],
        deductions: &[
            DeductionItem::employment("2024", ZoneType::Capital),
            DeductionItem::rd("2024", 8_000_000_000, RdType::General, RdMethod::Current),
            DeductionItem::investment(
                "2024",
                5_000_000_000,
                ZoneType::Capital,
                AssetType::Facility,
            ),
        ],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 200_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 500_000_000,
            withholding_tax: 30_000_000,
            determined_tax: 1_100_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-05",
        title: "대기업_RD_세액공제_최저한세",
        desc: "대기업이 R&D 세액공제 신청 시 최저한세 적용으로 공제 제한이 걸리는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 글로벌반도체",
            biz_reg_no: "567-89-01234",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Large,
            industry_code: "26110",
            hq_location: "서울특별시 강남구 테헤란로 152",
            capital_zone: CapitalZone::CapitalCongestion,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 500_000_000_000,
            taxable_income: 80_000_000_000,
            computed_tax: 17_400_000_000,
            paid_tax: 17_400_000_000,
            founding_date: "1990-03-01",
            venture_yn: false,
            rd_dept_yn: true,
            claim_reason: "R&D 세액공제 경정청구 (일반연구·인력개발)",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                2500.0,
                [500, 30, 100, 20, 0, 1850, 80],
                250_000_000_000,
                25_000_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                2450.0,
                [480, 28, 98, 18, 0, 1826, 75],
                240_000_000_000,
                24_000_000_000,
            ),
        ],
        deductions: &[
            DeductionItem::rd("2024", 30_000_000_000, RdType::General, RdMethod::Current)
                .with_existing(500_000_000, 0),
        ],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 2_000_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 8_000_000_000,
            withholding_tax: 500_000_000,
            determined_tax: 17_400_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 3_000_000_000,
                foreign_tax_total: 200_000_000,
                foreign_income_total: 5_000_000_000,
            },
        },
    },
    Case {
        id: "TC-CORP-06",
        title: "창업중소기업_감면",
        desc: "수도권 외 창업중소기업이 5년간 세액감면을 적용하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 스마트팩토리",
            biz_reg_no: "678-90-12345",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "62021",
            hq_location: "전라북도 전주시 덕진구 혁신로 45",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 2_000_000_000,
            taxable_income: 300_000_000,
            computed_tax: 39_000_000,
            paid_tax: 39_000_000,
            founding_date: "2022-06-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "창업중소기업 세액감면 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                20.0,
                [10, 0, 0, 0, 0, 10, 1],
                1_200_000_000,
                120_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                12.0,
                [6, 0, 0, 0, 0, 6, 0],
                700_000_000,
                70_000_000,
            ),
        ],
        deductions: &[DeductionItem::startup(
            "2024",
            300_000_000,
            ZoneType::NonCapital,
        )],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 10_000_000,
            loss_carryforward_total: 50_000_000,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 15_000_000,
            withholding_tax: 2_000_000,
            determined_tax: 39_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-07",
        title: "수도권과밀억제권역_투자제한",
        desc: "수도권 과밀억제권역 소재 기업의 투자세액공제 제한 적용 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 서울커머스",
            biz_reg_no: "789-01-23456",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "47911",
            hq_location: "서울특별시 구로구 디지털로26길 111",
            capital_zone: CapitalZone::CapitalCongestion,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 15_000_000_000,
            taxable_income: 1_500_000_000,
            computed_tax: 285_000_000,
            paid_tax: 285_000_000,
            founding_date: "2012-11-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "투자세액공제 경정청구 (수도권 과밀억제권역)",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                100.0,
                [30, 2, 5, 1, 0, 62, 8],
                7_000_000_000,
                700_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                95.0,
                [28, 2, 5, 0, 0, 60, 7],
                6_500_000_000,
                650_000_000,
            ),
        ],
        deductions: &[DeductionItem::investment(
            "2024",
            3_000_000_000,
            ZoneType::CapitalCongestion,
            AssetType::Facility,
        )],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 80_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 130_000_000,
            withholding_tax: 15_000_000,
            determined_tax: 285_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-08",
        title: "인구감소지역_추가공제",
        desc: "인구감소지역 소재 중소기업이 추가 공제율을 적용받는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 영주세라믹",
            biz_reg_no: "890-12-34567",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "23999",
            hq_location: "경상북도 영주시 풍기읍 산업로 12",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: true,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 3_000_000_000,
            taxable_income: 500_000_000,
            computed_tax: 75_000_000,
            paid_tax: 75_000_000,
            founding_date: "2008-09-15",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "인구감소지역 고용증대 세액공제 추가공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                35.0,
                [8, 1, 4, 0, 0, 22, 2],
                1_800_000_000,
                180_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                30.0,
                [5, 1, 4, 0, 0, 20, 2],
                1_500_000_000,
                150_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Depopulation)],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 20_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 30_000_000,
            withholding_tax: 3_000_000,
            determined_tax: 75_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-09",
        title: "이월공제_적용",
        desc: "전기 미사용 세액공제를 이월하여 당기에 적용하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 퓨처로보틱스",
            biz_reg_no: "901-23-45678",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "28111",
            hq_location: "대구광역시 달서구 성서공단로 88",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 6_000_000_000,
            taxable_income: 900_000_000,
            computed_tax: 171_000_000,
            paid_tax: 171_000_000,
            founding_date: "2016-04-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "R&D 세액공제 이월분 + 당기분 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                55.0,
                [18, 1, 3, 0, 0, 33, 4],
                4_000_000_000,
                400_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                50.0,
                [15, 1, 3, 0, 0, 31, 3],
                3_500_000_000,
                350_000_000,
            ),
        ],
        deductions: &[
            DeductionItem::rd("2024", 1_500_000_000, RdType::General, RdMethod::Current),
            // Prior-year credit, partly used, remainder carried into 2024.
            DeductionItem::rd("2023", 1_200_000_000, RdType::General, RdMethod::Current)
                .with_existing(50_000_000, 80_000_000),
        ],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 40_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 80_000_000,
            withholding_tax: 6_000_000,
            determined_tax: 171_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
    Case {
        id: "TC-CORP-10",
        title: "중복배제_검증_시나리오",
        desc: "창업감면과 고용증대 세액공제의 중복 적용 배제 규칙이 작동하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Corporate,
            applicant_name: "주식회사 뉴스타트업",
            biz_reg_no: "012-34-56789",
            tax_type: TaxType::Corp,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "58210",
            hq_location: "부산광역시 해운대구 센텀중앙로 97",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 4_000_000_000,
            taxable_income: 600_000_000,
            computed_tax: 96_000_000,
            paid_tax: 96_000_000,
            founding_date: "2021-01-15",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "창업감면 + 고용증대 세액공제 최적 조합 경정청구",
            sincerity_target: false,
            bookkeeping_type: None,
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                30.0,
                [15, 0, 0, 0, 0, 15, 2],
                2_000_000_000,
                200_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                20.0,
                [10, 0, 0, 0, 0, 10, 1],
                1_200_000_000,
                120_000_000,
            ),
        ],
        deductions: &[
            DeductionItem::startup("2024", 600_000_000, ZoneType::NonCapital),
            DeductionItem::employment("2024", ZoneType::NonCapital),
        ],
        financial: FinancialSummary {
            biz_income: None,
            non_taxable_income: 30_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 40_000_000,
            withholding_tax: 4_000_000,
            determined_tax: 96_000_000,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
        },
    },
];
