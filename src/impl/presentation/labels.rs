//! Korean sheet names, column headers and field labels of the workbook.

pub(crate) const SHEET_OVERVIEW: &str = "개요";
pub(crate) const SHEET_BASIC_INFO: &str = "기본정보";
pub(crate) const SHEET_EMPLOYMENT: &str = "고용정보";
pub(crate) const SHEET_DEDUCTIONS: &str = "공제항목";
pub(crate) const SHEET_FINANCIAL: &str = "재무정보";

/// Header of every key-value sheet.
pub(crate) const KEY_VALUE_HEADERS: [&str; 2] = ["항목", "값"];

pub(crate) const EMPLOYMENT_HEADERS: [&str; 11] = [
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
];

pub(crate) const DEDUCTION_HEADERS: [&str; 12] = [
    "항목분류",
    "조항",
    "귀속연도",
    "순번",
    "기준금액",
    "지역유형",
    "자산유형",
    "R&D유형",
    "방법",
    "기존적용여부",
    "기존적용금액",
    "이월잔액",
];

/// Financial field -> label, in no particular order. Fields missing here are
/// labelled with their raw name.
const FINANCIAL_LABELS: [(&str, &str); 14] = [
    ("biz_income", "사업소득금액"),
    ("non_taxable_income", "비과세소득"),
    ("loss_carryforward_total", "이월결손금합계"),
    ("loss_carryforward_detail", "이월결손금상세"),
    ("interim_prepaid_tax", "중간예납세액"),
    ("withholding_tax", "원천징수세액"),
    ("determined_tax", "결정세액"),
    ("dividend_income_total", "배당소득합계"),
    ("dividend_exclusion_detail", "배당소득제외상세"),
    ("foreign_tax_total", "외국납부세액"),
    ("foreign_income_total", "해외소득합계"),
    ("inc_comprehensive_income", "종합소득금액"),
    ("inc_deduction_total", "소득공제합계"),
    ("current_year_loss", "당기결손금"),
];

pub(crate) fn financial_label(field: &str) -> &str {
    FINANCIAL_LABELS
        .iter()
        .find(|(key, _)| *key == field)
        .map_or(field, |(_, label)| *label)
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Y"
    } else {
        "N"
    }
}
