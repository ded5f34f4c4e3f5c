use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LineCountEntry;
use crate::value_objects::FilePath;

/// A matching file that could not be counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanFailure {
    path: FilePath,
    reason: String,
}

impl ScanFailure {
    pub fn new(path: impl Into<FilePath>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result of counting a single file during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Counted(LineCountEntry),
    Failed(ScanFailure),
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Counted(entry) => entry.path(),
            Self::Failed(failure) => failure.path(),
        }
    }
}

impl From<LineCountEntry> for FileOutcome {
    fn from(entry: LineCountEntry) -> Self {
        Self::Counted(entry)
    }
}

impl From<ScanFailure> for FileOutcome {
    fn from(failure: ScanFailure) -> Self {
        Self::Failed(failure)
    }
}
