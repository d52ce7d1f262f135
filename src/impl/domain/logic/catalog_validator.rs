use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
    sync::OnceLock,
};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    data::models::{biz_reg_no_model::BizRegNoModel, iso_date_model::ISODateModel},
    entities::{ApplicantType, Case, CaseGroup, CaseGroupKind, TaxType},
    errors::{DuplicateCaseId, InvalidCatalogEntry},
};

fn case_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^TC-(CORP|INC)-\d{2}$").expect("hardcoded regex should be valid")
    })
}

impl CaseGroupKind {
    fn applicant_type(&self) -> ApplicantType {
        match self {
            CaseGroupKind::Corporate => ApplicantType::Corporate,
            CaseGroupKind::Individual => ApplicantType::Individual,
        }
    }

    fn tax_type(&self) -> TaxType {
        match self {
            CaseGroupKind::Corporate => TaxType::Corp,
            CaseGroupKind::Individual => TaxType::Inc,
        }
    }
}

/// Checks the catalog before anything is written. Stops at the first defect.
pub(crate) struct CatalogValidator<'a> {
    groups: &'a [CaseGroup],
}

impl<'a> CatalogValidator<'a> {
    pub(crate) fn new(groups: &'a [CaseGroup]) -> Self {
        Self { groups }
    }

    pub(crate) fn validate(self) -> Result<(), ServerError> {
        let mut seen_ids = HashSet::new();
        let mut seen_biz_reg_nos: HashMap<BizRegNoModel, &str> = HashMap::new();
        for group in self.groups {
            for case in group.cases {
                if !seen_ids.insert(case.id) {
                    return Err(DuplicateCaseId::new(case.id));
                }
                Self::validate_case(group.kind, case)?;

                let biz_reg_no = BizRegNoModel::from_str(case.basic.biz_reg_no)?;
                if let Some(other) = seen_biz_reg_nos.get(&biz_reg_no) {
                    return Err(InvalidCatalogEntry::new(
                        case.id,
                        &format!(
                            "registration number {} is already used by {}",
                            biz_reg_no.as_str(),
                            other
                        ),
                    ));
                }
                seen_biz_reg_nos.insert(biz_reg_no, case.id);
            }
        }
        Ok(())
    }

    fn validate_case(kind: CaseGroupKind, case: &Case) -> Result<(), ServerError> {
        let fail = |details: &str| Err(InvalidCatalogEntry::new(case.id, details));
        let basic = &case.basic;

        if !case_id_pattern().is_match(case.id) || !case.id.starts_with(kind.id_prefix()) {
            return fail(&format!("id must look like '{}NN'", kind.id_prefix()));
        }
        if basic.applicant_type != kind.applicant_type() {
            return fail("applicant type does not match its group");
        }
        if basic.tax_type != kind.tax_type() {
            return fail("tax type does not match its group");
        }
        if case.financial.supplement.applicant_type() != kind.applicant_type() {
            return fail("financial figures belong to the other applicant type");
        }
        if kind == CaseGroupKind::Corporate && basic.bookkeeping_type.is_some() {
            return fail("corporations do not declare a bookkeeping type");
        }

        let fiscal_start: NaiveDate = ISODateModel::from_str(basic.fiscal_start)?.into();
        let fiscal_end: NaiveDate = ISODateModel::from_str(basic.fiscal_end)?.into();
        ISODateModel::from_str(basic.founding_date)?;
        if fiscal_start > fiscal_end {
            return fail("fiscal year ends before it starts");
        }

        let [first, second] = &case.employees;
        if first.year_type == second.year_type {
            return fail("employment rows must cover both the current and previous year");
        }

        let mut seen_items = HashSet::new();
        for item in case.deductions {
            if !seen_items.insert((item.item_category, item.tax_year, item.item_seq)) {
                return fail(&format!(
                    "deduction {} for {} repeats item_seq {}",
                    item.item_category.code(),
                    item.tax_year,
                    item.item_seq
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{BookkeepingType, DeductionItem, RdMethod, RdType, YearType},
        ext::standard_catalog::{CORPORATE_CASES, INDIVIDUAL_CASES},
    };

    fn standard_groups() -> Vec<CaseGroup> {
        vec![
            CaseGroup {
                kind: CaseGroupKind::Corporate,
                cases: &CORPORATE_CASES,
            },
            CaseGroup {
                kind: CaseGroupKind::Individual,
                cases: &INDIVIDUAL_CASES,
            },
        ]
    }

    /// Single-case corporate catalog built from `TC-CORP-01` after `edit`.
    fn corporate_with(edit: impl FnOnce(&mut Case)) -> Vec<CaseGroup> {
        let mut case = CORPORATE_CASES[0].clone();
        edit(&mut case);
        vec![CaseGroup {
            kind: CaseGroupKind::Corporate,
            cases: Box::leak(Box::new([case])),
        }]
    }

    fn rejects(groups: Vec<CaseGroup>) {
        assert!(CatalogValidator::new(&groups).validate().is_err());
    }

    #[test]
    fn standard_catalog_is_valid() {
        CatalogValidator::new(&standard_groups()).validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_ids_across_groups() {
        let groups = vec![
            CaseGroup {
                kind: CaseGroupKind::Corporate,
                cases: &CORPORATE_CASES,
            },
            CaseGroup {
                kind: CaseGroupKind::Corporate,
                cases: &CORPORATE_CASES[..1],
            },
        ];
        rejects(groups);
    }

    #[test]
    fn rejects_malformed_or_misplaced_ids() {
        rejects(corporate_with(|c| c.id = "TC-CORP-1"));
        rejects(corporate_with(|c| c.id = "TC-INC-01"));
    }

    #[test]
    fn rejects_individual_data_in_corporate_group() {
        rejects(corporate_with(|c| c.basic.applicant_type = ApplicantType::Individual));
        rejects(corporate_with(|c| c.basic.tax_type = TaxType::Inc));
        rejects(corporate_with(|c| c.financial = INDIVIDUAL_CASES[0].financial.clone()));
        rejects(corporate_with(|c| {
            c.basic.bookkeeping_type = Some(BookkeepingType::DoubleEntry)
        }));
    }

    #[test]
    fn rejects_bad_registration_numbers_and_dates() {
        rejects(corporate_with(|c| c.basic.biz_reg_no = "1234567890"));
        rejects(corporate_with(|c| c.basic.fiscal_end = "2024-13-01"));
        rejects(corporate_with(|c| c.basic.founding_date = "15/03/2018"));
        rejects(corporate_with(|c| {
            c.basic.fiscal_start = "2024-12-31";
            c.basic.fiscal_end = "2024-01-01";
        }));
    }

    #[test]
    fn rejects_registration_number_shared_by_two_cases() {
        let mut copy = CORPORATE_CASES[1].clone();
        copy.basic.biz_reg_no = CORPORATE_CASES[0].basic.biz_reg_no;
        let groups = vec![CaseGroup {
            kind: CaseGroupKind::Corporate,
            cases: Box::leak(Box::new([CORPORATE_CASES[0].clone(), copy])),
        }];
        rejects(groups);
    }

    #[test]
    fn rejects_repeated_year_types() {
        rejects(corporate_with(|c| c.employees[1].year_type = YearType::Current));
    }

    #[test]
    fn rejects_repeated_item_seq() {
        static ITEMS: [DeductionItem; 2] = [
            DeductionItem::rd("2024", 100, RdType::General, RdMethod::Current),
            DeductionItem::rd("2024", 200, RdType::General, RdMethod::Increment),
        ];
        rejects(corporate_with(|c| c.deductions = &ITEMS));
    }

    #[test]
    fn same_category_in_other_year_is_allowed() {
        static ITEMS: [DeductionItem; 2] = [
            DeductionItem::rd("2024", 100, RdType::General, RdMethod::Current),
            DeductionItem::rd("2023", 200, RdType::General, RdMethod::Current),
        ];
        let groups = corporate_with(|c| c.deductions = &ITEMS);
        CatalogValidator::new(&groups).validate().unwrap();
    }
}
