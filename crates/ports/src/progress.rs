// crates/ports/src/progress.rs
use line_counter_domain::model::FileOutcome;
use line_counter_shared_kernel::{LineCount, Result};

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, outcome: &FileOutcome) -> Result<()>;
    fn on_complete(&self, files: usize, total: LineCount) -> Result<()>;
}

/// Sink that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _outcome: &FileOutcome) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _files: usize, _total: LineCount) -> Result<()> {
        Ok(())
    }
}
