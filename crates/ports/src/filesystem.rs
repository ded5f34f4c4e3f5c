// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use line_counter_domain::config::ExtensionAllowList;
use line_counter_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// What currently exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStatus {
    File,
    Directory,
    /// Exists but is neither a regular file nor a directory (socket, fifo, ...).
    Other,
    Missing,
}

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkPlan {
    pub root: PathBuf,
    pub extensions: ExtensionAllowList,
    pub follow_links: bool,
}

/// Port for filesystem queries and traversal.
pub trait FileSystem: Send + Sync {
    fn status(&self, path: &Path) -> PathStatus;

    /// Every regular file under `plan.root` whose name passes the allow-list,
    /// in a stable order.
    fn collect(&self, plan: &WalkPlan) -> Result<Vec<PathBuf>>;
}
