use fractic_server_error::ServerError;

use crate::{
    entities::{Case, CellValue, FinancialValue, SheetLayout},
    presentation::labels::{
        financial_label, yes_no, DEDUCTION_HEADERS, EMPLOYMENT_HEADERS, KEY_VALUE_HEADERS,
        SHEET_BASIC_INFO, SHEET_DEDUCTIONS, SHEET_EMPLOYMENT, SHEET_FINANCIAL, SHEET_OVERVIEW,
    },
};

const TABLE_COLUMN_WIDTH: f64 = 16.0;

fn key_value_rows(pairs: Vec<(&str, CellValue)>) -> Vec<Vec<CellValue>> {
    pairs
        .into_iter()
        .map(|(k, v)| vec![CellValue::text(k), v])
        .collect()
}

pub(crate) struct WorkbookLayoutBuilder;

impl WorkbookLayoutBuilder {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Sheets in workbook order.
    pub(crate) fn build(&self, case: &Case) -> Result<Vec<SheetLayout>, ServerError> {
        Ok(vec![
            self.overview(case),
            self.basic_info(case),
            self.employment(case),
            self.deductions(case),
            self.financial(case)?,
        ])
    }

    fn overview(&self, case: &Case) -> SheetLayout {
        let basic = &case.basic;
        SheetLayout {
            name: SHEET_OVERVIEW,
            column_widths: vec![20.0, 60.0],
            header: KEY_VALUE_HEADERS.to_vec(),
            rows: key_value_rows(vec![
                ("테스트케이스 ID", case.id.into()),
                ("테스트케이스명", case.title.into()),
                ("설명", case.desc.into()),
                ("세금유형", basic.tax_type.code().into()),
                ("신청자유형", basic.applicant_type.label().into()),
                ("귀속연도", basic.tax_year.into()),
            ]),
        }
    }

    fn basic_info(&self, case: &Case) -> SheetLayout {
        let basic = &case.basic;
        let mut pairs: Vec<(&str, CellValue)> = vec![
            ("신청자명", basic.applicant_name.into()),
            ("사업자등록번호", basic.biz_reg_no.into()),
            ("세금유형", basic.tax_type.code().into()),
            ("귀속연도", basic.tax_year.into()),
            ("기업규모", basic.corp_size.code().into()),
            ("업종코드", basic.industry_code.into()),
            ("본점소재지", basic.hq_location.into()),
            ("수도권구분", basic.capital_zone.code().into()),
            ("인구감소지역", yes_no(basic.depopulation_area).into()),
            ("사업연도시작", basic.fiscal_start.into()),
            ("사업연도종료", basic.fiscal_end.into()),
            ("매출액", basic.revenue.into()),
            ("과세표준", basic.taxable_income.into()),
            ("산출세액", basic.computed_tax.into()),
            ("기납부세액", basic.paid_tax.into()),
            ("설립일", basic.founding_date.into()),
            ("벤처확인", yes_no(basic.venture_yn).into()),
            ("R&D부서", yes_no(basic.rd_dept_yn).into()),
            ("청구사유", basic.claim_reason.into()),
        ];
        if let Some(bookkeeping_type) = basic.bookkeeping_type {
            pairs.push(("장부유형", bookkeeping_type.code().into()));
        }
        SheetLayout {
            name: SHEET_BASIC_INFO,
            column_widths: vec![20.0, 50.0],
            header: KEY_VALUE_HEADERS.to_vec(),
            rows: key_value_rows(pairs),
        }
    }

    fn employment(&self, case: &Case) -> SheetLayout {
        SheetLayout {
            name: SHEET_EMPLOYMENT,
            column_widths: vec![TABLE_COLUMN_WIDTH; EMPLOYMENT_HEADERS.len()],
            header: EMPLOYMENT_HEADERS.to_vec(),
            rows: case
                .employees
                .iter()
                .map(|e| {
                    vec![
                        e.year_type.code().into(),
                        e.total_regular.into(),
                        e.youth_count.into(),
                        e.disabled_count.into(),
                        e.aged_count.into(),
                        e.career_break_count.into(),
                        e.north_defector_count.into(),
                        e.general_count.into(),
                        e.excluded_count.into(),
                        e.total_salary.into(),
                        e.social_insurance_paid.into(),
                    ]
                })
                .collect(),
        }
    }

    fn deductions(&self, case: &Case) -> SheetLayout {
        SheetLayout {
            name: SHEET_DEDUCTIONS,
            column_widths: vec![TABLE_COLUMN_WIDTH; DEDUCTION_HEADERS.len()],
            header: DEDUCTION_HEADERS.to_vec(),
            rows: case
                .deductions
                .iter()
                .map(|d| {
                    vec![
                        d.item_category.code().into(),
                        d.provision.into(),
                        d.tax_year.into(),
                        d.item_seq.into(),
                        d.base_amount.into(),
                        d.zone_type.map(|z| z.code()).into(),
                        d.asset_type.map(|a| a.code()).into(),
                        d.rd_type.map(|r| r.code()).into(),
                        d.method.map(|m| m.code()).into(),
                        yes_no(d.existing_applied).into(),
                        d.existing_amount.into(),
                        d.carryforward_balance.into(),
                    ]
                })
                .collect(),
        }
    }

    fn financial(&self, case: &Case) -> Result<SheetLayout, ServerError> {
        let pairs = case
            .financial
            .fields()?
            .into_iter()
            .filter_map(|(key, value)| {
                let cell: CellValue = match value {
                    FinancialValue::Amount(a) => a.into(),
                    FinancialValue::Text(t) => CellValue::Text(t),
                    FinancialValue::Null => return None,
                };
                Some((financial_label(key), cell))
            })
            .collect();
        Ok(SheetLayout {
            name: SHEET_FINANCIAL,
            column_widths: vec![25.0, 30.0],
            header: KEY_VALUE_HEADERS.to_vec(),
            rows: key_value_rows(pairs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::standard_catalog::{CORPORATE_CASES, INDIVIDUAL_CASES};

    fn case(id: &str) -> &'static Case {
        CORPORATE_CASES
            .iter()
            .chain(INDIVIDUAL_CASES.iter())
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn sheets_are_in_fixed_order() {
        let names: Vec<&str> = WorkbookLayoutBuilder::new()
            .build(case("TC-CORP-01"))
            .unwrap()
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["개요", "기본정보", "고용정보", "공제항목", "재무정보"]);
    }

    #[test]
    fn employment_sheet_has_fixed_header_and_two_rows() {
        let sheets = WorkbookLayoutBuilder::new().build(case("TC-CORP-01")).unwrap();
        let employment = sheets.iter().find(|s| s.name == "고용정보").unwrap();
        assert_eq!(
            employment.header,
            vec![
                "연도구분",
                "상시근로자수",
                "청년수",
                "장애인수",
                "고령자수",
                "경력단절여성수",
                "북한이탈주민수",
                "일반근로자수",
                "제외근로자수",
                "총급여",
                "사회보험납부액",
            ]
        );
        assert_eq!(employment.rows.len(), 2);
        assert_eq!(employment.rows[0][0], CellValue::text("CURRENT"));
        assert_eq!(employment.rows[0][1], CellValue::Number(45.0));
        assert_eq!(employment.rows[1][0], CellValue::text("PREVIOUS"));
        assert_eq!(employment.rows[1][9], CellValue::Number(2_200_000_000.0));
    }

    #[test]
    fn overview_labels_applicant_type() {
        let corp = WorkbookLayoutBuilder::new().build(case("TC-CORP-01")).unwrap();
        let inc = WorkbookLayoutBuilder::new().build(case("TC-INC-01")).unwrap();
        assert_eq!(corp[0].value_of("신청자유형"), Some(&CellValue::text("법인")));
        assert_eq!(inc[0].value_of("신청자유형"), Some(&CellValue::text("개인")));
        assert_eq!(corp[0].column_widths, vec![20.0, 60.0]);
    }

    #[test]
    fn basic_info_renders_flags_as_yes_no() {
        let sheets = WorkbookLayoutBuilder::new().build(case("TC-CORP-08")).unwrap();
        let basic = &sheets[1];
        assert_eq!(basic.value_of("인구감소지역"), Some(&CellValue::text("Y")));
        assert_eq!(basic.value_of("벤처확인"), Some(&CellValue::text("N")));
        assert_eq!(basic.value_of("매출액"), Some(&CellValue::Number(3_000_000_000.0)));
    }

    #[test]
    fn bookkeeping_row_only_when_set() {
        let corp = WorkbookLayoutBuilder::new().build(case("TC-CORP-01")).unwrap();
        assert!(!corp[1].keys().contains(&"장부유형"));
        assert_eq!(corp[1].rows.len(), 19);

        let inc = WorkbookLayoutBuilder::new().build(case("TC-INC-06")).unwrap();
        assert_eq!(inc[1].rows.len(), 20);
        assert_eq!(inc[1].value_of("장부유형"), Some(&CellValue::text("SIMPLE")));
    }

    #[test]
    fn deduction_rows_leave_absent_optionals_empty() {
        let sheets = WorkbookLayoutBuilder::new().build(case("TC-CORP-02")).unwrap();
        let deductions = &sheets[3];
        assert_eq!(deductions.header.len(), 12);
        let row = &deductions.rows[0];
        assert_eq!(row[0], CellValue::text("RD"));
        assert_eq!(row[1], CellValue::text("조특법10"));
        assert_eq!(row[5], CellValue::Empty);
        assert_eq!(row[6], CellValue::Empty);
        assert_eq!(row[7], CellValue::text("NEW_GROWTH"));
        assert_eq!(row[8], CellValue::text("INCREMENT"));
        assert_eq!(row[9], CellValue::text("N"));
        assert_eq!(row[11], CellValue::Number(0.0));
    }

    #[test]
    fn deduction_rows_follow_catalog_order() {
        let sheets = WorkbookLayoutBuilder::new().build(case("TC-CORP-04")).unwrap();
        let categories: Vec<&str> = sheets[3].keys();
        assert_eq!(categories, vec!["EMPLOYMENT", "RD", "INVESTMENT"]);
    }

    #[test]
    fn absent_financial_values_produce_no_rows() {
        let corp = WorkbookLayoutBuilder::new().build(case("TC-CORP-01")).unwrap();
        let financial = &corp[4];
        assert!(!financial.keys().contains(&"사업소득금액"));
        assert!(!financial.keys().contains(&"이월결손금상세"));
        assert_eq!(financial.rows.len(), 8);
        // Zero is a value, not an absence.
        assert_eq!(
            financial.value_of("이월결손금합계"),
            Some(&CellValue::Number(0.0))
        );
    }

    #[test]
    fn individual_financial_rows_include_detail_when_present() {
        let inc = WorkbookLayoutBuilder::new().build(case("TC-INC-10")).unwrap();
        let financial = &inc[4];
        assert_eq!(
            financial.keys(),
            vec![
                "사업소득금액",
                "비과세소득",
                "이월결손금합계",
                "이월결손금상세",
                "중간예납세액",
                "원천징수세액",
                "결정세액",
                "종합소득금액",
                "소득공제합계",
                "당기결손금",
            ]
        );
        assert_eq!(financial.column_widths, vec![25.0, 30.0]);
    }
}
