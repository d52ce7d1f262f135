pub(crate) mod corporate;
pub(crate) mod individual;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{corporate::CORPORATE_CASES, individual::INDIVIDUAL_CASES};
    use crate::entities::{ApplicantType, ItemCategory};

    #[test]
    fn groups_hold_ten_cases_each() {
        assert_eq!(CORPORATE_CASES.len(), 10);
        assert_eq!(INDIVIDUAL_CASES.len(), 10);
    }

    #[test]
    fn case_ids_are_unique_across_catalog() {
        let ids: HashSet<&str> = CORPORATE_CASES
            .iter()
            .chain(INDIVIDUAL_CASES.iter())
            .map(|c| c.id)
            .collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn deduction_categories_are_enumerated_values() {
        for case in CORPORATE_CASES.iter().chain(INDIVIDUAL_CASES.iter()) {
            assert!(!case.deductions.is_empty(), "{} has no deductions", case.id);
            for item in case.deductions {
                assert!(ItemCategory::ALL.contains(&item.item_category));
                assert_eq!(item.provision, item.item_category.provision());
            }
        }
    }

    #[test]
    fn groups_match_applicant_type() {
        assert!(CORPORATE_CASES
            .iter()
            .all(|c| c.basic.applicant_type == ApplicantType::Corporate));
        assert!(INDIVIDUAL_CASES
            .iter()
            .all(|c| c.basic.applicant_type == ApplicantType::Individual));
    }

    #[test]
    fn carryforward_case_keeps_prior_year_item() {
        let case = CORPORATE_CASES
            .iter()
            .find(|c| c.id == "TC-CORP-09")
            .unwrap();
        let prior = &case.deductions[1];
        assert_eq!(prior.tax_year, "2023");
        assert!(prior.existing_applied);
        assert_eq!(prior.existing_amount, 50_000_000);
        assert_eq!(prior.carryforward_balance, 80_000_000);
    }
}
