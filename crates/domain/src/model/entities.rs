pub mod file_outcome;
pub mod line_count_entry;
pub mod scan_result;

pub use file_outcome::{FileOutcome, ScanFailure};
pub use line_count_entry::LineCountEntry;
pub use scan_result::ScanResult;
