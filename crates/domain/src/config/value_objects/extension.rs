use std::{fmt, str::FromStr};

use line_counter_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Suffixes counted when no `--ext` override is given.
pub const DEFAULT_EXTENSIONS: [&str; 6] = [".py", ".js", ".html", ".css", ".ts", ".d.ts"];

/// A filename suffix such as `.py` or `.d.ts`. Always starts with a dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    /// Accepts `py` or `.py`; a missing leading dot is added.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidExtension {
            extension: raw.to_string(),
            reason: reason.to_string(),
        };

        let body = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if body.is_empty() {
            return Err(invalid("extension is empty"));
        }
        if body.contains(['/', '\\']) {
            return Err(invalid("extension must not contain a path separator"));
        }
        if body.chars().any(char::is_whitespace) {
            return Err(invalid("extension must not contain whitespace"));
        }
        Ok(Self(format!(".{body}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive exact suffix match against a file name.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(self.0.as_str())
    }
}

impl FromStr for Extension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Extension {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Extension> for String {
    fn from(value: Extension) -> Self {
        value.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of suffixes a directory scan counts.
///
/// A name is accepted when it ends with *any* listed suffix, so overlapping
/// entries (`.ts` and `.d.ts`) never cause a file to be counted twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAllowList {
    extensions: Vec<Extension>,
}

impl ExtensionAllowList {
    /// Builds a list from raw suffixes, dropping duplicates while keeping first-seen order.
    pub fn new<I, S>(raw: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions: Vec<Extension> = Vec::new();
        for item in raw {
            let ext = Extension::new(item.as_ref())?;
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        if extensions.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "extension allow-list must not be empty".to_string(),
            });
        }
        Ok(Self { extensions })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| ext.matches(file_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.iter()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| Extension(ext.to_string())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_matches_known_suffixes() {
        let list = ExtensionAllowList::default();
        assert!(list.matches("index.ts"));
        assert!(list.matches("types.d.ts"));
        assert!(list.matches("main.py"));
        assert!(list.matches("site.css"));
        assert!(!list.matches("notes.txt"));
        assert!(!list.matches("README.md"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let list = ExtensionAllowList::default();
        assert!(!list.matches("MAIN.PY"));
        assert!(!list.matches("index.Ts"));
    }

    #[test]
    fn matching_is_suffix_not_extension() {
        let list = ExtensionAllowList::default();
        // `.json` does not end with `.js`, `.tsx` does not end with `.ts`
        assert!(!list.matches("package.json"));
        assert!(!list.matches("app.tsx"));
        assert!(list.matches("archive.tar.js"));
    }

    #[test]
    fn leading_dot_is_optional() {
        assert_eq!(Extension::new("rs").unwrap().as_str(), ".rs");
        assert_eq!(Extension::new(".d.ts").unwrap().as_str(), ".d.ts");
        assert_eq!(Extension::new("  go ").unwrap().as_str(), ".go");
    }

    #[test]
    fn rejects_malformed_extensions() {
        assert!(Extension::new("").is_err());
        assert!(Extension::new(".").is_err());
        assert!(Extension::new("a/b").is_err());
        assert!(Extension::new("a b").is_err());
    }

    #[test]
    fn custom_list_dedups_and_rejects_empty() {
        let list = ExtensionAllowList::new(["rs", ".rs", "toml"]).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.matches("Cargo.toml"));

        let empty: [&str; 0] = [];
        assert!(ExtensionAllowList::new(empty).is_err());
    }

    #[test]
    fn extension_deserializes_with_validation() {
        let ok: Extension = serde_json::from_str("\"py\"").unwrap();
        assert_eq!(ok.as_str(), ".py");
        assert!(serde_json::from_str::<Extension>("\"\"").is_err());
    }
}
