use pretty_assertions::assert_eq;
use sheetdrop_bridge::config::{AlertConfig, PageConfig, UploadConfig};
use sheetdrop_page::config::{ConfigError, load_config_from, save_config_to};

#[tokio::test]
async fn first_load_writes_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = load_config_from(&path).await.unwrap();
    assert_eq!(config, PageConfig::default());
    assert!(path.exists());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("dismiss_delay_ms = 5000"));
    assert!(written.contains(".xlsx"));
}

#[tokio::test]
async fn saved_config_is_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = PageConfig {
        alerts: AlertConfig {
            dismiss_delay_ms: 8000,
        },
        upload: UploadConfig {
            allowed_extensions: vec![".ods".to_owned()],
            format_label: "OpenDocument".to_owned(),
        },
    };

    save_config_to(&path, &config).await.unwrap();
    assert_eq!(load_config_from(&path).await.unwrap(), config);
}

#[tokio::test]
async fn malformed_file_is_a_deserialize_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[alerts]\ndismiss_delay_ms = \"soon\"\n").unwrap();

    let error = load_config_from(&path).await.unwrap_err();
    assert!(matches!(error, ConfigError::DeserializeError(_)));
}
