use std::{fs, path::Path};

use fractic_server_error::ServerError;
use tracing::debug;

use crate::errors::{CreateDirError, WriteError};

pub(crate) trait FixtureFilesDatasource {
    /// Creates the directory and its parents; succeeds if it already exists.
    fn ensure_dir(&self, dir: &Path) -> Result<(), ServerError>;

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), ServerError>;
}

pub(crate) struct FixtureFilesDatasourceImpl;

impl FixtureFilesDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl FixtureFilesDatasource for FixtureFilesDatasourceImpl {
    fn ensure_dir(&self, dir: &Path) -> Result<(), ServerError> {
        fs::create_dir_all(dir)
            .map_err(|e| CreateDirError::with_debug(&dir.display().to_string(), &e))?;
        debug!(dir = %dir.display(), "output directory ready");
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), ServerError> {
        fs::write(path, contents)
            .map_err(|e| WriteError::with_debug(&path.display().to_string(), &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("corp");
        let ds = FixtureFilesDatasourceImpl::new();
        ds.ensure_dir(&dir).unwrap();
        ds.ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn write_fails_when_parent_is_missing() {
        let root = tempfile::tempdir().unwrap();
        let ds = FixtureFilesDatasourceImpl::new();
        let result = ds.write(&root.path().join("missing").join("a.json"), b"{}");
        assert!(result.is_err());
    }
}
