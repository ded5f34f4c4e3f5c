pub mod entities;

pub use entities::{FileOutcome, LineCountEntry, ScanFailure, ScanResult};
