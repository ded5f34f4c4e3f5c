pub mod aggregates;
pub mod value_objects;

pub use aggregates::ScanOptions;
pub use value_objects::{DecodePolicy, Extension, ExtensionAllowList};
