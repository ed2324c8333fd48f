use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not found; using defaults");
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path.clone(),
        source,
    })?;

    file_config.merge_into(&mut config);
    tracing::debug!(
        path = %config_path.display(),
        endpoint = %config.api.endpoint,
        keywords = config.formatting.keywords.len(),
        "config file loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[api]
endpoint = "http://127.0.0.1:9000/api/chat"
user_type = "advocate"

[formatting]
keywords = ["tenant", "lease"]
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.api.endpoint, "http://127.0.0.1:9000/api/chat");
        assert_eq!(config.api.user_type.as_deref(), Some("advocate"));
        assert_eq!(config.api.timeout_ms, 60_000);
        assert_eq!(config.formatting.keywords, vec!["tenant", "lease"]);
        assert_eq!(config.ui.greeting, "Hi there! How can I help you?");
    }

    #[test]
    fn empty_keyword_list_overrides_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[formatting]\nkeywords = []\n").expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert!(config.formatting.keywords.is_empty());
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[api]\ntimeout_ms = \"soon\"\n").expect("must write test config");

        let error = load(Some(&config_path)).expect_err("invalid type must fail");

        assert!(matches!(error, AppError::ConfigParse { ref path, .. } if path == &config_path));
    }
}
