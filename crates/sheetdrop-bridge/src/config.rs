use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before a notification banner is dismissed, in milliseconds.
pub const DEFAULT_DISMISS_DELAY_MILLISECONDS: u64 = 5000;

/// Configuration for the automatic dismissal of notification banners.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Time in milliseconds between page-ready and the dismissal of every
    /// banner present at that moment.
    pub dismiss_delay_ms: u64,
}

impl AlertConfig {
    /// The dismissal delay as a [`Duration`].
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MILLISECONDS,
        }
    }
}

/// Configuration for the upload control's filename check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Filename suffixes accepted by the guard. Compared case-insensitively; a
    /// missing leading dot is added when the list is loaded.
    pub allowed_extensions: Vec<String>,
    /// Human-readable name of the accepted format, used in the message shown
    /// on rejection.
    pub format_label: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![".xlsx".to_owned(), ".xls".to_owned()],
            format_label: "Excel".to_owned(),
        }
    }
}

/// Global page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    /// Settings for notification banners.
    pub alerts: AlertConfig,
    /// Settings for the upload file picker.
    pub upload: UploadConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PageConfig = toml::from_str("[alerts]\ndismiss_delay_ms = 1200\n")
            .expect("partial config should parse");

        assert_eq!(config.alerts.dismiss_delay(), Duration::from_millis(1200));
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn empty_document_is_the_default_config() {
        let config: PageConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.alerts.dismiss_delay(), Duration::from_secs(5));
    }
}
