use std::path::Path;

use line_counter_domain::{
    config::ScanOptions,
    model::{FileOutcome, LineCountEntry, ScanFailure, ScanResult},
};
use line_counter_ports::{
    filesystem::{FileSystem, PathStatus, WalkPlan},
    measurement::LineMeasurer,
    progress::ProgressSink,
};
use line_counter_shared_kernel::{ApplicationError, DomainError, PathKind, Result};
use tracing::{debug, warn};

/// Counts non-empty lines in one file or across a directory tree.
pub struct CountLines<'a> {
    filesystem: &'a dyn FileSystem,
    measurer: &'a dyn LineMeasurer,
    progress: &'a dyn ProgressSink,
}

impl<'a> CountLines<'a> {
    pub fn new(
        filesystem: &'a dyn FileSystem,
        measurer: &'a dyn LineMeasurer,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { filesystem, measurer, progress }
    }

    /// Counts a single regular file. Decode failures are returned as errors.
    pub fn count_file(&self, path: &Path) -> Result<LineCountEntry> {
        self.ensure(path, PathKind::File)?;
        let lines = self.measurer.count_non_empty(path)?;
        debug!(path = %path.display(), lines = lines.value(), "counted file");
        Ok(LineCountEntry::new(path, lines))
    }

    /// Walks `root` and counts every file accepted by `options.extensions`.
    ///
    /// Unreadable files are recorded as failures unless the decode policy
    /// aborts, in which case the first one ends the scan.
    pub fn count_directory(&self, root: &Path, options: &ScanOptions) -> Result<ScanResult> {
        self.ensure(root, PathKind::Directory)?;

        let plan = WalkPlan {
            root: root.to_path_buf(),
            extensions: options.extensions.clone(),
            follow_links: options.follow_links,
        };
        let paths = self.filesystem.collect(&plan)?;
        debug!(root = %root.display(), files = paths.len(), "collected matching files");

        let mut result = ScanResult::new(root);
        for path in paths {
            let outcome = match self.measurer.count_non_empty(&path) {
                Ok(lines) => FileOutcome::Counted(LineCountEntry::new(path, lines)),
                Err(err) if err.is_unreadable() => {
                    if options.decode_policy.aborts() {
                        return Err(ApplicationError::ScanAborted {
                            root: root.to_path_buf(),
                            counted: result.entries().len(),
                            source: Box::new(err),
                        }
                        .into());
                    }
                    warn!(path = %path.display(), error = %err, "skipping unreadable file");
                    FileOutcome::Failed(ScanFailure::new(path, err.to_string()))
                }
                Err(err) => return Err(err),
            };
            self.progress.on_file(&outcome)?;
            result.record(outcome);
        }

        self.progress.on_complete(result.entries().len(), result.total())?;
        Ok(result)
    }

    fn ensure(&self, path: &Path, expected: PathKind) -> Result<()> {
        let found = self.filesystem.status(path);
        let ok = matches!(
            (expected, found),
            (PathKind::File, PathStatus::File) | (PathKind::Directory, PathStatus::Directory)
        );
        if ok {
            Ok(())
        } else {
            debug!(path = %path.display(), ?found, %expected, "rejecting path");
            Err(DomainError::InvalidPath { path: path.to_path_buf(), expected }.into())
        }
    }
}
