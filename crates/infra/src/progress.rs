// crates/infra/src/progress.rs
use line_counter_domain::model::FileOutcome;
use line_counter_ports::progress::ProgressSink;
use line_counter_shared_kernel::{LineCount, Result};
use tracing::{debug, info};

/// Progress sink that reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_file(&self, outcome: &FileOutcome) -> Result<()> {
        match outcome {
            FileOutcome::Counted(entry) => {
                debug!(path = %entry.path().display(), lines = entry.non_empty_lines().value(), "counted");
            }
            FileOutcome::Failed(failure) => {
                debug!(path = %failure.path().display(), reason = failure.reason(), "failed");
            }
        }
        Ok(())
    }

    fn on_complete(&self, files: usize, total: LineCount) -> Result<()> {
        info!(files, total = total.value(), "scan complete");
        Ok(())
    }
}
