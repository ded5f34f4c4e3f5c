//! Options governing a single scan.

use serde::{Deserialize, Serialize};

use super::value_objects::{DecodePolicy, ExtensionAllowList};

/// Everything a directory scan needs besides the root path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    pub extensions: ExtensionAllowList,
    pub decode_policy: DecodePolicy,
    /// Descend into symlinked directories. Loops are detected by the walker.
    pub follow_links: bool,
}

impl ScanOptions {
    pub fn with_extensions(mut self, extensions: ExtensionAllowList) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}
