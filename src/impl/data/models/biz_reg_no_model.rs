use std::{str::FromStr, sync::OnceLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidBizRegNo;

fn biz_reg_no_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{3}-\d{2}-\d{5}$").expect("hardcoded regex should be valid")
    })
}

/// Korean business registration number, `NNN-NN-NNNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct BizRegNoModel(String);

impl FromStr for BizRegNoModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !biz_reg_no_pattern().is_match(s) {
            return Err(InvalidBizRegNo::new(s));
        }
        Ok(BizRegNoModel(s.to_string()))
    }
}

impl BizRegNoModel {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}
