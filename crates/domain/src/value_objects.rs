//! Value objects shared with the rest of the workspace.

pub use line_counter_shared_kernel::value_objects::{FilePath, LineCount};
