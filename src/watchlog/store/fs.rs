use super::DataStore;
use crate::error::{Result, WatchlogError};
use crate::model::MediaRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store over a single JSON array file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WatchlogError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<MediaRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(WatchlogError::Io)?;
        let records: Vec<MediaRecord> =
            serde_json::from_str(&content).map_err(WatchlogError::Serialization)?;
        Ok(records)
    }

    fn save(&mut self, records: &[MediaRecord]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(WatchlogError::Serialization)?;
        fs::write(&self.path, content).map_err(WatchlogError::Io)?;
        Ok(())
    }
}
