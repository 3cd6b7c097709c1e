//! Normalized allow-list of filename suffixes.

use crate::config::ConfigError;

/// Filename suffixes accepted by the upload guard.
///
/// Every entry is lowercase and starts with a `.`, so matching is a plain
/// `ends_with` on the lowercased filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions(Vec<String>);

impl AllowedExtensions {
    /// Builds the allow-list from configured entries. Entries are trimmed,
    /// lowercased, prefixed with `.` when needed and deduplicated in order.
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions: Vec<String> = Vec::new();
        for entry in entries {
            let raw = entry.as_ref();
            let trimmed = raw.trim().to_lowercase();
            if trimmed.is_empty() || trimmed == "." {
                return Err(ConfigError::InvalidExtension(raw.to_owned()));
            }
            let extension = if trimmed.starts_with('.') {
                trimmed
            } else {
                format!(".{trimmed}")
            };
            if !extensions.contains(&extension) {
                extensions.push(extension);
            }
        }

        if extensions.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        Ok(Self(extensions))
    }

    /// Returns `true` if the filename ends with any allowed suffix, ignoring
    /// case.
    pub fn matches(&self, filename: &str) -> bool {
        let filename = filename.to_lowercase();
        self.0.iter().any(|extension| filename.ends_with(extension))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Lists the suffixes for a user message, e.g. `(.xlsx or .xls)`.
    pub fn describe(&self) -> String {
        match self.0.as_slice() {
            [] => String::new(),
            [only] => format!("({only})"),
            [init @ .., last] => format!("({} or {last})", init.join(", ")),
        }
    }
}
