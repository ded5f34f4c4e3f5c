use serde::{Deserialize, Serialize};

/// What a directory scan does with a matching file it cannot read as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Record the file as a failure and keep scanning.
    #[default]
    Skip,
    /// Stop the whole scan at the first failure.
    Abort,
}

impl DecodePolicy {
    pub const fn aborts(self) -> bool {
        matches!(self, Self::Abort)
    }
}
