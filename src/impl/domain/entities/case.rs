use super::{
    basic_info::BasicInfo, deduction_item::DeductionItem, employment_year::EmploymentYear,
    financial_summary::FinancialSummary,
};

/// One complete test scenario.
#[derive(Debug, Clone)]
pub struct Case {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub basic: BasicInfo,
    pub employees: [EmploymentYear; 2],
    pub deductions: &'static [DeductionItem],
    pub financial: FinancialSummary,
}

impl Case {
    /// Request identifier linking every exported record to this case: the
    /// case id without separators (`TC-CORP-01` -> `TCCORP01`).
    pub fn req_id(&self) -> String {
        self.id.replace('-', "")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseGroupKind {
    Corporate,
    Individual,
}

impl CaseGroupKind {
    /// Prefix every case id in the group carries.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CaseGroupKind::Corporate => "TC-CORP-",
            CaseGroupKind::Individual => "TC-INC-",
        }
    }

    /// Tag used on progress log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            CaseGroupKind::Corporate => "CORP",
            CaseGroupKind::Individual => "INC",
        }
    }
}

/// Named, ordered group of cases written to one output directory.
#[derive(Debug, Clone, Copy)]
pub struct CaseGroup {
    pub kind: CaseGroupKind,
    pub cases: &'static [Case],
}
