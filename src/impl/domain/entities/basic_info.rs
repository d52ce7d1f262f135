use super::code::serialize_as_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantType {
    Corporate,
    Individual,
}

impl ApplicantType {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicantType::Corporate => "C",
            ApplicantType::Individual => "P",
        }
    }

    /// Label shown on the overview sheet.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicantType::Corporate => "법인",
            ApplicantType::Individual => "개인",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxType {
    /// Corporate income tax.
    Corp,
    /// Individual (comprehensive) income tax.
    Inc,
}

impl TaxType {
    pub fn code(&self) -> &'static str {
        match self {
            TaxType::Corp => "CORP",
            TaxType::Inc => "INC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpSize {
    Small,
    Medium,
    Large,
}

impl CorpSize {
    pub fn code(&self) -> &'static str {
        match self {
            CorpSize::Small => "SMALL",
            CorpSize::Medium => "MEDIUM",
            CorpSize::Large => "LARGE",
        }
    }
}

/// Location of the head office relative to the capital metropolitan area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapitalZone {
    NonCapital,
    Capital,
    /// Overcrowding-restraint region inside the capital area.
    CapitalCongestion,
}

impl CapitalZone {
    pub fn code(&self) -> &'static str {
        match self {
            CapitalZone::NonCapital => "NON_CAPITAL",
            CapitalZone::Capital => "CAPITAL",
            CapitalZone::CapitalCongestion => "CAPITAL_CONGESTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookkeepingType {
    DoubleEntry,
    Simple,
}

impl BookkeepingType {
    pub fn code(&self) -> &'static str {
        match self {
            BookkeepingType::DoubleEntry => "DOUBLE_ENTRY",
            BookkeepingType::Simple => "SIMPLE",
        }
    }
}

serialize_as_code!(ApplicantType, TaxType, CorpSize, CapitalZone, BookkeepingType);

/// Applicant identity and classification attributes of one case.
///
/// Dates are kept as ISO `YYYY-MM-DD` strings, exactly as they are written to
/// the fixtures; the catalog validator checks that they parse.
#[derive(Debug, Clone)]
pub struct BasicInfo {
    pub applicant_type: ApplicantType,
    pub applicant_name: &'static str,
    pub biz_reg_no: &'static str,
    pub tax_type: TaxType,
    pub tax_year: &'static str,
    pub corp_size: CorpSize,
    pub industry_code: &'static str,
    pub hq_location: &'static str,
    pub capital_zone: CapitalZone,
    pub depopulation_area: bool,
    pub fiscal_start: &'static str,
    pub fiscal_end: &'static str,
    pub revenue: i64,
    pub taxable_income: i64,
    pub computed_tax: i64,
    pub paid_tax: i64,
    pub founding_date: &'static str,
    pub venture_yn: bool,
    pub rd_dept_yn: bool,
    pub claim_reason: &'static str,
    pub sincerity_target: bool,
    /// Only set for individual filers.
    pub bookkeeping_type: Option<BookkeepingType>,
}
