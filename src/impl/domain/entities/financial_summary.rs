use fractic_server_error::ServerError;

use crate::errors::JsonSerializationError;

use super::basic_info::ApplicantType;

/// One year's entry in the itemized loss carry-forward.
#[derive(Debug, Clone, serde_derive::Serialize)]
pub struct LossCarryforward {
    pub year: &'static str,
    pub amount: i64,
}

/// Figures that only exist for one applicant type.
#[derive(Debug, Clone)]
pub enum FinancialSupplement {
    Corporate {
        dividend_income_total: i64,
        foreign_tax_total: i64,
        foreign_income_total: i64,
    },
    Individual {
        inc_comprehensive_income: i64,
        inc_deduction_total: i64,
        current_year_loss: Option<i64>,
    },
}

impl FinancialSupplement {
    pub fn applicant_type(&self) -> ApplicantType {
        match self {
            FinancialSupplement::Corporate { .. } => ApplicantType::Corporate,
            FinancialSupplement::Individual { .. } => ApplicantType::Individual,
        }
    }
}

/// Supplementary tax-computation figures of one case.
#[derive(Debug, Clone)]
pub struct FinancialSummary {
    /// Business income; not reported by corporations.
    pub biz_income: Option<i64>,
    pub non_taxable_income: i64,
    pub loss_carryforward_total: i64,
    pub loss_carryforward_detail: Option<&'static [LossCarryforward]>,
    pub interim_prepaid_tax: i64,
    pub withholding_tax: i64,
    pub determined_tax: i64,
    pub supplement: FinancialSupplement,
}

/// Value of one financial field as it is exported.
#[derive(Debug, Clone, PartialEq)]
pub enum FinancialValue {
    Amount(i64),
    Text(String),
    /// Field is part of the schema for this applicant type but has no value.
    Null,
}

impl FinancialSummary {
    /// Fields in their fixed export order.
    ///
    /// Keys a case does not define at all are left out; `biz_income` is always
    /// listed and becomes [`FinancialValue::Null`] when absent. The itemized
    /// carry-forward is rendered as a compact JSON string.
    pub fn fields(&self) -> Result<Vec<(&'static str, FinancialValue)>, ServerError> {
        let mut fields = vec![
            (
                "biz_income",
                self.biz_income
                    .map_or(FinancialValue::Null, FinancialValue::Amount),
            ),
            (
                "non_taxable_income",
                FinancialValue::Amount(self.non_taxable_income),
            ),
            (
                "loss_carryforward_total",
                FinancialValue::Amount(self.loss_carryforward_total),
            ),
        ];
        if let Some(detail) = self.loss_carryforward_detail {
            let text = serde_json::to_string(detail)
                .map_err(|e| JsonSerializationError::with_debug(&e))?;
            fields.push(("loss_carryforward_detail", FinancialValue::Text(text)));
        }
        fields.extend([
            (
                "interim_prepaid_tax",
                FinancialValue::Amount(self.interim_prepaid_tax),
            ),
            ("withholding_tax", FinancialValue::Amount(self.withholding_tax)),
            ("determined_tax", FinancialValue::Amount(self.determined_tax)),
        ]);
        match &self.supplement {
            FinancialSupplement::Corporate {
                dividend_income_total,
                foreign_tax_total,
                foreign_income_total,
            } => fields.extend([
                (
                    "dividend_income_total",
                    FinancialValue::Amount(*dividend_income_total),
                ),
                ("foreign_tax_total", FinancialValue::Amount(*foreign_tax_total)),
                (
                    "foreign_income_total",
                    FinancialValue::Amount(*foreign_income_total),
                ),
            ]),
            FinancialSupplement::Individual {
                inc_comprehensive_income,
                inc_deduction_total,
                current_year_loss,
            } => {
                fields.extend([
                    (
                        "inc_comprehensive_income",
                        FinancialValue::Amount(*inc_comprehensive_income),
                    ),
                    (
                        "inc_deduction_total",
                        FinancialValue::Amount(*inc_deduction_total),
                    ),
                ]);
                if let Some(loss) = current_year_loss {
                    fields.push(("current_year_loss", FinancialValue::Amount(*loss)));
                }
            }
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DETAIL: [LossCarryforward; 2] = [
        LossCarryforward {
            year: "2022",
            amount: 30000000,
        },
        LossCarryforward {
            year: "2023",
            amount: 40000000,
        },
    ];

    fn individual() -> FinancialSummary {
        FinancialSummary {
            biz_income: Some(120000000),
            non_taxable_income: 3000000,
            loss_carryforward_total: 70000000,
            loss_carryforward_detail: Some(&DETAIL),
            interim_prepaid_tax: 0,
            withholding_tax: 1000000,
            determined_tax: 5940000,
            supplement: FinancialSupplement::Individual {
                inc_comprehensive_income: 50000000,
                inc_deduction_total: 8000000,
                current_year_loss: Some(0),
            },
        }
    }

    #[test]
    fn individual_fields_keep_fixed_order() {
        let keys: Vec<&str> = individual()
            .fields()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                "biz_income",
                "non_taxable_income",
                "loss_carryforward_total",
                "loss_carryforward_detail",
                "interim_prepaid_tax",
                "withholding_tax",
                "determined_tax",
                "inc_comprehensive_income",
                "inc_deduction_total",
                "current_year_loss",
            ]
        );
    }

    #[test]
    fn detail_is_compact_json_text() {
        let fields = individual().fields().unwrap();
        let (_, detail) = &fields[3];
        assert_eq!(
            detail,
            &FinancialValue::Text(
                r#"[{"year":"2022","amount":30000000},{"year":"2023","amount":40000000}]"#
                    .to_string()
            )
        );
    }

    #[test]
    fn corporate_biz_income_is_null() {
        let summary = FinancialSummary {
            biz_income: None,
            loss_carryforward_detail: None,
            supplement: FinancialSupplement::Corporate {
                dividend_income_total: 0,
                foreign_tax_total: 0,
                foreign_income_total: 0,
            },
            ..individual()
        };
        let fields = summary.fields().unwrap();
        assert_eq!(fields[0], ("biz_income", FinancialValue::Null));
        assert_eq!(fields.len(), 9);
        assert!(fields.iter().all(|(k, _)| !k.starts_with("inc_")));
    }
}
