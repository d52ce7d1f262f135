use fractic_server_error::ServerError;
use serde::ser::SerializeMap as _;

use crate::entities::{
    ApplicantType, AssetType, BookkeepingType, CapitalZone, Case, CorpSize, DeductionItem,
    EmploymentYear, FinancialSummary, FinancialValue, ItemCategory, RdMethod, RdType, TaxType,
    YearType, ZoneType,
};

/// Claims exported as fixtures always start out as the first, freshly
/// received submission of a test request.
const SEQ_NO: u32 = 1;
const REQUEST_STATUS: &str = "RECEIVED";
const REQUEST_SOURCE: &str = "TEST";

/// Claim request document, in the shape the refund engine ingests.
///
/// Field order of every struct is the key order of the emitted JSON.
#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct RequestDocumentModel<'a> {
    pub request: RequestEnvelopeModel<'a>,
    pub basic: BasicModel<'a>,
    pub employees: Vec<EmployeeModel<'a>>,
    pub deductions: Vec<DeductionModel<'a>>,
    pub financial: FinancialModel<'a>,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct RequestEnvelopeModel<'a> {
    pub req_id: &'a str,
    pub applicant_type: ApplicantType,
    pub applicant_id: &'a str,
    pub applicant_name: &'a str,
    pub tax_type: TaxType,
    pub tax_year: &'a str,
    pub request_date: &'a str,
    pub seq_no: u32,
    pub request_status: &'static str,
    pub request_source: &'static str,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct BasicModel<'a> {
    pub req_id: &'a str,
    pub request_date: &'a str,
    pub tax_type: TaxType,
    pub applicant_name: &'a str,
    pub biz_reg_no: &'a str,
    pub corp_size: CorpSize,
    pub industry_code: &'a str,
    pub hq_location: &'a str,
    pub capital_zone: CapitalZone,
    pub depopulation_area: bool,
    pub tax_year: &'a str,
    pub fiscal_start: &'a str,
    pub fiscal_end: &'a str,
    pub revenue: i64,
    pub taxable_income: i64,
    pub computed_tax: i64,
    pub paid_tax: i64,
    pub founding_date: &'a str,
    pub venture_yn: bool,
    pub rd_dept_yn: bool,
    pub claim_reason: &'a str,
    pub sincerity_target: bool,
    pub bookkeeping_type: Option<BookkeepingType>,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct EmployeeModel<'a> {
    pub year_type: YearType,
    pub total_regular: f64,
    pub youth_count: u32,
    pub disabled_count: u32,
    pub aged_count: u32,
    pub career_break_count: u32,
    pub north_defector_count: u32,
    pub general_count: u32,
    pub excluded_count: u32,
    pub total_salary: i64,
    pub social_insurance_paid: i64,
    pub req_id: &'a str,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct DeductionModel<'a> {
    pub item_category: ItemCategory,
    pub provision: &'a str,
    pub tax_year: &'a str,
    pub item_seq: u32,
    pub base_amount: i64,
    pub zone_type: Option<ZoneType>,
    pub asset_type: Option<AssetType>,
    pub rd_type: Option<RdType>,
    pub method: Option<RdMethod>,
    pub existing_applied: bool,
    pub existing_amount: i64,
    pub carryforward_balance: i64,
    pub req_id: &'a str,
}

/// `req_id` followed by the case's financial fields. The key set varies by
/// applicant type, so this one is written as a map.
#[derive(Debug)]
pub(crate) struct FinancialModel<'a> {
    pub req_id: &'a str,
    pub fields: Vec<(&'static str, FinancialValue)>,
}

impl serde::Serialize for FinancialModel<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("req_id", self.req_id)?;
        for (key, value) in &self.fields {
            match value {
                FinancialValue::Amount(a) => map.serialize_entry(key, a)?,
                FinancialValue::Text(t) => map.serialize_entry(key, t)?,
                FinancialValue::Null => map.serialize_entry(key, &())?,
            }
        }
        map.end()
    }
}

impl<'a> RequestDocumentModel<'a> {
    pub(crate) fn new(
        case: &'a Case,
        req_id: &'a str,
        request_date: &'a str,
    ) -> Result<Self, ServerError> {
        let basic = &case.basic;
        Ok(Self {
            request: RequestEnvelopeModel {
                req_id,
                applicant_type: basic.applicant_type,
                applicant_id: basic.biz_reg_no,
                applicant_name: basic.applicant_name,
                tax_type: basic.tax_type,
                tax_year: basic.tax_year,
                request_date,
                seq_no: SEQ_NO,
                request_status: REQUEST_STATUS,
                request_source: REQUEST_SOURCE,
            },
            basic: BasicModel {
                req_id,
                request_date,
                tax_type: basic.tax_type,
                applicant_name: basic.applicant_name,
                biz_reg_no: basic.biz_reg_no,
                corp_size: basic.corp_size,
                industry_code: basic.industry_code,
                hq_location: basic.hq_location,
                capital_zone: basic.capital_zone,
                depopulation_area: basic.depopulation_area,
                tax_year: basic.tax_year,
                fiscal_start: basic.fiscal_start,
                fiscal_end: basic.fiscal_end,
                revenue: basic.revenue,
                taxable_income: basic.taxable_income,
                computed_tax: basic.computed_tax,
                paid_tax: basic.paid_tax,
                founding_date: basic.founding_date,
                venture_yn: basic.venture_yn,
                rd_dept_yn: basic.rd_dept_yn,
                claim_reason: basic.claim_reason,
                sincerity_target: basic.sincerity_target,
                bookkeeping_type: basic.bookkeeping_type,
            },
            employees: case
                .employees
                .iter()
                .map(|e| EmployeeModel::new(e, req_id))
                .collect(),
            deductions: case
                .deductions
                .iter()
                .map(|d| DeductionModel::new(d, req_id))
                .collect(),
            financial: FinancialModel::new(&case.financial, req_id)?,
        })
    }
}

impl<'a> EmployeeModel<'a> {
    fn new(e: &EmploymentYear, req_id: &'a str) -> Self {
        Self {
            year_type: e.year_type,
            total_regular: e.total_regular,
            youth_count: e.youth_count,
            disabled_count: e.disabled_count,
            aged_count: e.aged_count,
            career_break_count: e.career_break_count,
            north_defector_count: e.north_defector_count,
            general_count: e.general_count,
            excluded_count: e.excluded_count,
            total_salary: e.total_salary,
            social_insurance_paid: e.social_insurance_paid,
            req_id,
        }
    }
}

impl<'a> DeductionModel<'a> {
    fn new(d: &'a DeductionItem, req_id: &'a str) -> Self {
        Self {
            item_category: d.item_category,
            provision: d.provision,
            tax_year: d.tax_year,
            item_seq: d.item_seq,
            base_amount: d.base_amount,
            zone_type: d.zone_type,
            asset_type: d.asset_type,
            rd_type: d.rd_type,
            method: d.method,
            existing_applied: d.existing_applied,
            existing_amount: d.existing_amount,
            carryforward_balance: d.carryforward_balance,
            req_id,
        }
    }
}

impl<'a> FinancialModel<'a> {
    fn new(f: &FinancialSummary, req_id: &'a str) -> Result<Self, ServerError> {
        Ok(Self {
            req_id,
            fields: f.fields()?,
        })
    }
}
