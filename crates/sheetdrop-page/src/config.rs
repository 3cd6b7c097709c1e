//! `config.toml` for the page behaviors: banner delay and upload allow-list.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use sheetdrop_bridge::config::PageConfig;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Why the page configuration could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No per-user config directory could be resolved for this platform.
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// `config.toml` is not valid TOML or has a field of the wrong type.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    /// `upload.allowed_extensions` lists nothing, so every non-empty
    /// selection would be rejected.
    #[error("upload allow-list is empty")]
    EmptyAllowList,
    /// An `upload.allowed_extensions` entry is blank or a lone dot.
    #[error("invalid extension in upload allow-list: {0:?}")]
    InvalidExtension(String),
}

/// `config.toml` inside the per-user config directory of sheetdrop.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("dev", "sheetdrop", "sheetdrop")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoriesNotFound)
}

/// Reads the page settings from `config_path`.
///
/// On first run there is no file yet: the defaults (5 s banners, Excel
/// uploads) are written to `config_path` so they can be edited, and returned.
pub async fn load_config_from(config_path: &Path) -> Result<PageConfig, ConfigError> {
    if config_path.exists() {
        log::info!("Reading page settings from {config_path:?}");
        let contents = read_to_string(config_path).await?;
        return Ok(toml::from_str(&contents)?);
    }

    log::info!("No page settings at {config_path:?}, writing defaults");
    let config = PageConfig::default();
    write_config(config_path, &config, false).await?;
    Ok(config)
}

/// Writes `config` to `config_path` as pretty TOML, replacing the file.
pub async fn save_config_to(config_path: &Path, config: &PageConfig) -> Result<(), ConfigError> {
    write_config(config_path, config, true).await
}

async fn write_config(
    config_path: &Path,
    config: &PageConfig,
    replace: bool,
) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if replace {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let contents = toml::to_string_pretty(config)?;
    let mut file = options.open(config_path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;
    Ok(())
}
