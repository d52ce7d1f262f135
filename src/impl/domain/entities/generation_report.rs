use std::path::PathBuf;

use super::case::CaseGroupKind;

/// Paths written for one case.
#[derive(Debug, Clone)]
pub struct WrittenFixture {
    pub case_id: &'static str,
    pub group: CaseGroupKind,
    pub json_path: PathBuf,
    pub xlsx_path: PathBuf,
}

/// Outcome of a full generator run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub fixtures: Vec<WrittenFixture>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.fixtures.len()
    }

    pub fn count(&self, group: CaseGroupKind) -> usize {
        self.fixtures.iter().filter(|f| f.group == group).count()
    }
}
