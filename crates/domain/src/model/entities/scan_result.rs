use std::path::Path;

use serde::Serialize;

use super::{FileOutcome, LineCountEntry, ScanFailure};
use crate::value_objects::{FilePath, LineCount};

/// Aggregated outcome of one directory scan.
///
/// `total` is maintained by [`ScanResult::record`] and always equals the sum
/// of the entries' counts. Failures never contribute to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    root: FilePath,
    entries: Vec<LineCountEntry>,
    failures: Vec<ScanFailure>,
    total: LineCount,
}

impl ScanResult {
    pub fn new(root: impl Into<FilePath>) -> Self {
        Self { root: root.into(), entries: Vec::new(), failures: Vec::new(), total: LineCount::zero() }
    }

    pub fn record(&mut self, outcome: impl Into<FileOutcome>) {
        match outcome.into() {
            FileOutcome::Counted(entry) => {
                self.total += entry.non_empty_lines();
                self.entries.push(entry);
            }
            FileOutcome::Failed(failure) => self.failures.push(failure),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn entries(&self) -> &[LineCountEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    pub fn total(&self) -> LineCount {
        self.total
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
