use crate::{
    entities::{Case, CaseGroup, CaseGroupKind},
    ext::standard_catalog::{CORPORATE_CASES, INDIVIDUAL_CASES},
};

pub(crate) trait CaseDatasource {
    fn group(&self) -> CaseGroup;
}

pub(crate) struct CorporateCasesDatasourceImpl {
    cases: &'static [Case],
}

impl CorporateCasesDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self {
            cases: &CORPORATE_CASES,
        }
    }
}

impl CaseDatasource for CorporateCasesDatasourceImpl {
    fn group(&self) -> CaseGroup {
        CaseGroup {
            kind: CaseGroupKind::Corporate,
            cases: self.cases,
        }
    }
}

pub(crate) struct IndividualCasesDatasourceImpl {
    cases: &'static [Case],
}

impl IndividualCasesDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self {
            cases: &INDIVIDUAL_CASES,
        }
    }
}

impl CaseDatasource for IndividualCasesDatasourceImpl {
    fn group(&self) -> CaseGroup {
        CaseGroup {
            kind: CaseGroupKind::Individual,
            cases: self.cases,
        }
    }
}
