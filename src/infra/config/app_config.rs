use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub api: ApiConfig,
    pub formatting: FormattingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Directory for the log file; the platform state dir when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    /// Audience hint forwarded to the server as `user_type`.
    pub user_type: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/api/chat".to_owned(),
            timeout_ms: 60_000,
            user_type: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattingConfig {
    pub keywords: Vec<String>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "penalty",
                "court",
                "fine",
                "section",
                "IPC",
                "CRPC",
                "Motor Vehicles Act",
                "case",
                "legal",
                "law",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub greeting: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi there! How can I help you?".to_owned(),
        }
    }
}
