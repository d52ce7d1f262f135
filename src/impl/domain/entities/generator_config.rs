use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::case::CaseGroupKind;

/// Where and how fixtures are written.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_root: PathBuf,
    pub corporate_dir: String,
    pub individual_dir: String,
    /// Submission date stamped on every request envelope.
    pub request_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: Path::new(env!("CARGO_MANIFEST_DIR")).join("testCase"),
            corporate_dir: "corp".to_string(),
            individual_dir: "individual".to_string(),
            request_date: NaiveDate::from_ymd_opt(2025, 2, 10)
                .expect("hardcoded date should be valid"),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_request_date(mut self, request_date: NaiveDate) -> Self {
        self.request_date = request_date;
        self
    }

    pub fn group_dir(&self, group: CaseGroupKind) -> PathBuf {
        match group {
            CaseGroupKind::Corporate => self.output_root.join(&self.corporate_dir),
            CaseGroupKind::Individual => self.output_root.join(&self.individual_dir),
        }
    }
}
