pub mod decode_policy;
pub mod extension;

pub use decode_policy::DecodePolicy;
pub use extension::{Extension, ExtensionAllowList};
