// crates/ports/src/measurement.rs
use std::path::Path;

use line_counter_shared_kernel::{LineCount, Result};

/// Port for counting the non-empty lines of one file.
pub trait LineMeasurer: Send + Sync {
    /// Fails with a decode error when the content is not valid UTF-8 text.
    fn count_non_empty(&self, path: &Path) -> Result<LineCount>;
}
