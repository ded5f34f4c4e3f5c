use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::value_objects::{FilePath, LineCount};

/// Non-empty line count of one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCountEntry {
    path: FilePath,
    #[serde(rename = "lines")]
    non_empty_lines: LineCount,
}

impl LineCountEntry {
    pub fn new(path: impl Into<FilePath>, non_empty_lines: LineCount) -> Self {
        Self { path: path.into(), non_empty_lines }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn non_empty_lines(&self) -> LineCount {
        self.non_empty_lines
    }
}
