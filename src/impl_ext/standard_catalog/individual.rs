use crate::entities::{
    ApplicantType, BasicInfo, BookkeepingType, CapitalZone, Case, CorpSize, DeductionItem,
    EmploymentYear, FinancialSummary, FinancialSupplement, LossCarryforward, RdMethod, RdType,
    TaxType, YearType, ZoneType,
};

/// Individual business owner (개인) scenarios.
pub static INDIVIDUAL_CASES: [Case; 10] = [
    Case {
        id: "TC-INC-01",
        title: "개인사업자_고용증대_기본",
        desc: "복식부기 의무 개인사업자가 고용증대 세액공제를 신청하는 기본 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "김세무",
            biz_reg_no: "111-22-33333",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "56111",
            hq_location: "경기도 수원시 팔달구 인계로 77",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 1_500_000_000,
            taxable_income: 200_000_000,
            computed_tax: 60_920_000,
            paid_tax: 60_920_000,
            founding_date: "2015-03-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "고용증대 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                10.0,
                [4, 0, 1, 0, 0, 5, 1],
                500_000_000,
                50_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                7.0,
                [2, 0, 1, 0, 0, 4, 0],
                350_000_000,
                35_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Capital)],
        financial: FinancialSummary {
            biz_income: Some(200_000_000),
            non_taxable_income: 5_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 25_000_000,
            withholding_tax: 3_000_000,
            determined_tax: 60_920_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 200_000_000,
                inc_deduction_total: 15_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-02",
        title: "개인사업자_RD_세액공제",
        desc: "IT업종 개인사업자가 R&D 세액공제를 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "이연구",
            biz_reg_no: "222-33-44444",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "62010",
            hq_location: "서울특별시 강남구 역삼로 150",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 2_000_000_000,
            taxable_income: 300_000_000,
            computed_tax: 97_940_000,
            paid_tax: 97_940_000,
            founding_date: "2013-08-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "R&D 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                15.0,
                [8, 0, 0, 0, 0, 7, 1],
                900_000_000,
                90_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                13.0,
                [7, 0, 0, 0, 0, 6, 1],
                750_000_000,
                75_000_000,
            ),
        ],
        deductions: &[DeductionItem::rd(
            "2024",
            500_000_000,
            RdType::General,
            RdMethod::Current,
        )],
        financial: FinancialSummary {
            biz_income: Some(300_000_000),
            non_taxable_income: 8_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 40_000_000,
            withholding_tax: 5_000_000,
            determined_tax: 97_940_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 300_000_000,
                inc_deduction_total: 18_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-03",
        title: "개인_창업감면_수도권외",
        desc: "수도권 외 지역 창업 개인사업자가 세액감면을 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "박창업",
            biz_reg_no: "333-44-55555",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "63111",
            hq_location: "광주광역시 북구 첨단과기로 123",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 800_000_000,
            taxable_income: 100_000_000,
            computed_tax: 24_390_000,
            paid_tax: 24_390_000,
            founding_date: "2022-01-10",
            venture_yn: true,
            rd_dept_yn: false,
            claim_reason: "창업중소기업 세액감면 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                5.0,
                [3, 0, 0, 0, 0, 2, 0],
                250_000_000,
                25_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                3.0,
                [2, 0, 0, 0, 0, 1, 0],
                150_000_000,
                15_000_000,
            ),
        ],
        deductions: &[DeductionItem::startup(
            "2024",
            100_000_000,
            ZoneType::NonCapital,
        )],
        financial: FinancialSummary {
            biz_income: Some(100_000_000),
            non_taxable_income: 3_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 10_000_000,
            withholding_tax: 1_000_000,
            determined_tax: 24_390_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 100_000_000,
                inc_deduction_total: 8_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-04",
        title: "성실신고_대상_개인사업자",
        desc: "성실신고 확인 대상 고매출 개인사업자의 세액공제 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "최매출",
            biz_reg_no: "444-55-66666",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "47190",
            hq_location: "서울특별시 중구 명동길 14",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 8_000_000_000,
            taxable_income: 500_000_000,
            computed_tax: 171_940_000,
            paid_tax: 171_940_000,
            founding_date: "2005-06-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "고용증대 세액공제 경정청구 (성실신고대상)",
            sincerity_target: true,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                25.0,
                [5, 1, 3, 0, 0, 16, 2],
                1_500_000_000,
                150_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                22.0,
                [4, 1, 3, 0, 0, 14, 1],
                1_300_000_000,
                130_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Capital)],
        financial: FinancialSummary {
            biz_income: Some(500_000_000),
            non_taxable_income: 10_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 80_000_000,
            withholding_tax: 10_000_000,
            determined_tax: 171_940_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 500_000_000,
                inc_deduction_total: 25_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-05",
        title: "개인_복합세액공제",
        desc: "개인사업자가 고용증대 + R&D 세액공제를 복합 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "정복합",
            biz_reg_no: "555-66-77777",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "72192",
            hq_location: "대전광역시 유성구 과학로 125",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 3_000_000_000,
            taxable_income: 400_000_000,
            computed_tax: 134_940_000,
            paid_tax: 134_940_000,
            founding_date: "2017-02-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "고용증대 + R&D 세액공제 복합 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                18.0,
                [8, 0, 1, 0, 0, 9, 1],
                1_200_000_000,
                120_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                14.0,
                [5, 0, 1, 0, 0, 8, 1],
                900_000_000,
                90_000_000,
            ),
        ],
        deductions: &[
            DeductionItem::employment("2024", ZoneType::NonCapital),
            DeductionItem::rd("2024", 600_000_000, RdType::General, RdMethod::Current),
        ],
        financial: FinancialSummary {
            biz_income: Some(400_000_000),
            non_taxable_income: 12_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 55_000_000,
            withholding_tax: 7_000_000,
            determined_tax: 134_940_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 400_000_000,
                inc_deduction_total: 20_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-06",
        title: "간편장부_대상자",
        desc: "간편장부 대상 소규모 개인사업자의 세액공제 신청 시나리오 (제한 있음)",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "한소규",
            biz_reg_no: "666-77-88888",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "56219",
            hq_location: "인천광역시 남동구 논현로 55",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 200_000_000,
            taxable_income: 30_000_000,
            computed_tax: 3_564_000,
            paid_tax: 3_564_000,
            founding_date: "2023-05-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "고용증대 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::Simple),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                3.0,
                [2, 0, 0, 0, 0, 1, 0],
                120_000_000,
                12_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                1.0,
                [1, 0, 0, 0, 0, 0, 0],
                40_000_000,
                4_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Capital)],
        financial: FinancialSummary {
            biz_income: Some(30_000_000),
            non_taxable_income: 1_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 0,
            withholding_tax: 500_000,
            determined_tax: 3_564_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 30_000_000,
                inc_deduction_total: 5_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-07",
        title: "개인_벤처기업_확인",
        desc: "벤처기업 확인 개인사업자가 R&D 세액공제를 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "오벤처",
            biz_reg_no: "777-88-99999",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "58219",
            hq_location: "경기도 성남시 분당구 판교역로 235",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 1_000_000_000,
            taxable_income: 150_000_000,
            computed_tax: 42_140_000,
            paid_tax: 42_140_000,
            founding_date: "2020-09-01",
            venture_yn: true,
            rd_dept_yn: true,
            claim_reason: "벤처기업 R&D 세액공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                8.0,
                [5, 0, 0, 0, 0, 3, 0],
                600_000_000,
                60_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                6.0,
                [4, 0, 0, 0, 0, 2, 0],
                420_000_000,
                42_000_000,
            ),
        ],
        deductions: &[DeductionItem::rd(
            "2024",
            300_000_000,
            RdType::General,
            RdMethod::Current,
        )],
        financial: FinancialSummary {
            biz_income: Some(150_000_000),
            non_taxable_income: 5_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 15_000_000,
            withholding_tax: 2_000_000,
            determined_tax: 42_140_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 150_000_000,
                inc_deduction_total: 12_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-08",
        title: "인구감소지역_개인사업자",
        desc: "인구감소지역 소재 개인사업자의 고용증대 추가공제 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "강지방",
            biz_reg_no: "888-99-00000",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "10611",
            hq_location: "강원특별자치도 삼척시 근덕면 산업로 10",
            capital_zone: CapitalZone::NonCapital,
            depopulation_area: true,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 600_000_000,
            taxable_income: 80_000_000,
            computed_tax: 17_060_000,
            paid_tax: 17_060_000,
            founding_date: "2010-04-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "인구감소지역 고용증대 세액공제 추가공제 경정청구",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                8.0,
                [2, 1, 2, 0, 0, 3, 1],
                350_000_000,
                35_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                6.0,
                [1, 1, 2, 0, 0, 2, 0],
                260_000_000,
                26_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Depopulation)],
        financial: FinancialSummary {
            biz_income: Some(80_000_000),
            non_taxable_income: 2_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 5_000_000,
            withholding_tax: 1_000_000,
            determined_tax: 17_060_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 80_000_000,
                inc_deduction_total: 7_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-09",
        title: "경정청구_기한초과",
        desc: "경정청구 기한(5년)이 지난 귀속연도에 대해 신청하여 기한 검증이 실패하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "윤기한",
            biz_reg_no: "999-00-11111",
            tax_type: TaxType::Inc,
            tax_year: "2018",
            corp_size: CorpSize::Small,
            industry_code: "46410",
            hq_location: "서울특별시 종로구 세종대로 209",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2018-01-01",
            fiscal_end: "2018-12-31",
            revenue: 1_200_000_000,
            taxable_income: 180_000_000,
            computed_tax: 47_540_000,
            paid_tax: 47_540_000,
            founding_date: "2008-01-15",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "고용증대 세액공제 경정청구 (2018년 귀속)",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                12.0,
                [4, 0, 1, 0, 0, 7, 1],
                700_000_000,
                70_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                10.0,
                [3, 0, 1, 0, 0, 6, 0],
                580_000_000,
                58_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2018", ZoneType::Capital)],
        financial: FinancialSummary {
            biz_income: Some(180_000_000),
            non_taxable_income: 5_000_000,
            loss_carryforward_total: 0,
            loss_carryforward_detail: None,
            interim_prepaid_tax: 20_000_000,
            withholding_tax: 3_000_000,
            determined_tax: 47_540_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 180_000_000,
                inc_deduction_total: 12_000_000,
                current_year_loss: None,
            },
        },
    },
    Case {
        id: "TC-INC-10",
        title: "개인_결손금_이월공제",
        desc: "전기 결손금이 있어 과세표준이 줄어든 상태에서 세액공제를 신청하는 시나리오",
        basic: BasicInfo {
            applicant_type: ApplicantType::Individual,
            applicant_name: "송결손",
            biz_reg_no: "000-11-22222",
            tax_type: TaxType::Inc,
            tax_year: "2024",
            corp_size: CorpSize::Small,
            industry_code: "73111",
            hq_location: "서울특별시 마포구 월드컵북로 396",
            capital_zone: CapitalZone::Capital,
            depopulation_area: false,
            fiscal_start: "2024-01-01",
            fiscal_end: "2024-12-31",
            revenue: 900_000_000,
            taxable_income: 50_000_000,
            computed_tax: 5_940_000,
            paid_tax: 5_940_000,
            founding_date: "2019-07-01",
            venture_yn: false,
            rd_dept_yn: false,
            claim_reason: "고용증대 세액공제 경정청구 (결손금 이월 상태)",
            sincerity_target: false,
            bookkeeping_type: Some(BookkeepingType::DoubleEntry),
        },
        employees: [
            EmploymentYear::new(
                YearType::Current,
                7.0,
                [3, 0, 0, 0, 0, 4, 0],
                420_000_000,
                42_000_000,
            ),
            EmploymentYear::new(
                YearType::Previous,
                5.0,
                [2, 0, 0, 0, 0, 3, 0],
                300_000_000,
                30_000_000,
            ),
        ],
        deductions: &[DeductionItem::employment("2024", ZoneType::Capital)],
        financial: FinancialSummary {
            biz_income: Some(120_000_000),
            non_taxable_income: 3_000_000,
            loss_carryforward_total: 70_000_000,
            loss_carryforward_detail: Some(&[
                LossCarryforward {
                    year: "2022",
                    amount: 30_000_000,
                },
                LossCarryforward {
                    year: "2023",
                    amount: 40_000_000,
                },
            ]),
            interim_prepaid_tax: 0,
            withholding_tax: 1_000_000,
            determined_tax: 5_940_000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 50_000_000,
                inc_deduction_total: 8_000_000,
                current_year_loss: Some(0),
            },
        },
    },
];
