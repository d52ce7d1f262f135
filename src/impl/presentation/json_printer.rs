use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::models::{iso_date_model::ISODateModel, request_document_model::RequestDocumentModel},
    entities::Case,
    errors::JsonSerializationError,
};

pub(crate) struct JsonPrinter;

impl JsonPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Renders the claim request document of `case`, pretty-printed with
    /// two-space indentation and without a trailing newline.
    pub(crate) fn print(
        &self,
        case: &Case,
        request_date: NaiveDate,
    ) -> Result<String, ServerError> {
        let req_id = case.req_id();
        let request_date = ISODateModel::from(request_date).to_string();
        let document = RequestDocumentModel::new(case, &req_id, &request_date)?;
        serde_json::to_string_pretty(&document).map_err(|e| JsonSerializationError::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::standard_catalog::{CORPORATE_CASES, INDIVIDUAL_CASES};
    use serde_json::Value;

    fn request_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    fn render(case: &Case) -> (String, Value) {
        let text = JsonPrinter::new().print(case, request_date()).unwrap();
        let value = serde_json::from_str(&text).unwrap();
        (text, value)
    }

    fn case(id: &str) -> &'static Case {
        CORPORATE_CASES
            .iter()
            .chain(INDIVIDUAL_CASES.iter())
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn top_level_keys_are_in_fixed_order() {
        let (text, _) = render(case("TC-CORP-01"));
        let positions: Vec<usize> = [
            "\"request\"",
            "\"basic\"",
            "\"employees\"",
            "\"deductions\"",
            "\"financial\"",
        ]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_record_carries_the_request_id() {
        for case in CORPORATE_CASES.iter().chain(INDIVIDUAL_CASES.iter()) {
            let (_, doc) = render(case);
            let req_id = case.id.replace('-', "");
            assert_eq!(doc["request"]["req_id"], req_id.as_str());
            assert_eq!(doc["basic"]["req_id"], req_id.as_str());
            assert_eq!(doc["financial"]["req_id"], req_id.as_str());
            for e in doc["employees"].as_array().unwrap() {
                assert_eq!(e["req_id"], req_id.as_str());
            }
            for d in doc["deductions"].as_array().unwrap() {
                assert_eq!(d["req_id"], req_id.as_str());
            }
            assert_eq!(doc["request"]["applicant_id"], doc["basic"]["biz_reg_no"]);
        }
    }

    #[test]
    fn envelope_matches_basic_info() {
        let (_, doc) = render(case("TC-INC-03"));
        let request = &doc["request"];
        assert_eq!(request["req_id"], "TCINC03");
        assert_eq!(request["applicant_type"], "P");
        assert_eq!(request["tax_type"], "INC");
        assert_eq!(request["tax_year"], doc["basic"]["tax_year"]);
        assert_eq!(request["request_date"], "2025-02-10");
        assert_eq!(request["seq_no"], 1);
        assert_eq!(request["request_status"], "RECEIVED");
        assert_eq!(request["request_source"], "TEST");
        assert_eq!(doc["basic"]["request_date"], "2025-02-10");
    }

    #[test]
    fn employees_are_current_then_previous() {
        for case in CORPORATE_CASES.iter().chain(INDIVIDUAL_CASES.iter()) {
            let (_, doc) = render(case);
            let employees = doc["employees"].as_array().unwrap();
            assert_eq!(employees.len(), 2);
            assert_eq!(employees[0]["year_type"], "CURRENT");
            assert_eq!(employees[1]["year_type"], "PREVIOUS");
        }
    }

    #[test]
    fn deduction_categories_are_known_codes() {
        for case in CORPORATE_CASES.iter().chain(INDIVIDUAL_CASES.iter()) {
            let (_, doc) = render(case);
            for d in doc["deductions"].as_array().unwrap() {
                let category = d["item_category"].as_str().unwrap();
                assert!(["EMPLOYMENT", "RD", "INVESTMENT", "STARTUP"].contains(&category));
            }
        }
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let printer = JsonPrinter::new();
        let case = case("TC-CORP-09");
        assert_eq!(
            printer.print(case, request_date()).unwrap(),
            printer.print(case, request_date()).unwrap()
        );
    }

    #[test]
    fn total_regular_is_written_as_a_float() {
        let (text, _) = render(case("TC-CORP-01"));
        assert!(text.contains("\"total_regular\": 45.0"));
    }

    #[test]
    fn output_is_indented_and_keeps_hangul() {
        let (text, _) = render(case("TC-CORP-01"));
        assert!(text.starts_with("{\n  \"request\": {\n    \"req_id\": \"TCCORP01\""));
        assert!(text.contains("주식회사 한빛테크"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn corporate_documents_have_null_bookkeeping_and_biz_income() {
        let (_, doc) = render(case("TC-CORP-01"));
        assert!(doc["basic"]["bookkeeping_type"].is_null());
        let financial = doc["financial"].as_object().unwrap();
        assert!(financial["biz_income"].is_null());
        assert!(financial.contains_key("dividend_income_total"));
        assert!(!financial.contains_key("loss_carryforward_detail"));
        assert!(!financial.contains_key("inc_comprehensive_income"));
    }

    #[test]
    fn absent_deduction_attributes_are_null() {
        let (_, doc) = render(case("TC-CORP-02"));
        let item = &doc["deductions"][0];
        assert_eq!(item["item_category"], "RD");
        assert_eq!(item["provision"], "조특법10");
        assert_eq!(item["item_seq"], 1);
        assert!(item["zone_type"].is_null());
        assert!(item["asset_type"].is_null());
        assert_eq!(item["rd_type"], "NEW_GROWTH");
        assert_eq!(item["existing_applied"], false);
    }

    #[test]
    fn individual_loss_detail_is_embedded_as_text() {
        let (_, doc) = render(case("TC-INC-10"));
        let financial = &doc["financial"];
        assert_eq!(financial["loss_carryforward_total"], 70_000_000);
        assert_eq!(
            financial["loss_carryforward_detail"],
            r#"[{"year":"2022","amount":30000000},{"year":"2023","amount":40000000}]"#
        );
        assert_eq!(financial["current_year_loss"], 0);
        assert_eq!(doc["basic"]["bookkeeping_type"], "DOUBLE_ENTRY");
    }
}
