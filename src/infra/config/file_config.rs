use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{ApiConfig, AppConfig, FormattingConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub api: Option<FileApiConfig>,
    pub formatting: Option<FileFormattingConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(api) = self.api {
            api.merge_into(&mut config.api);
        }

        if let Some(formatting) = self.formatting {
            formatting.merge_into(&mut config.formatting);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(dir) = self.dir {
            config.dir = Some(dir);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileApiConfig {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub user_type: Option<String>,
}

impl FileApiConfig {
    fn merge_into(self, config: &mut ApiConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }

        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }

        if let Some(user_type) = self.user_type {
            config.user_type = Some(user_type);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileFormattingConfig {
    pub keywords: Option<Vec<String>>,
}

impl FileFormattingConfig {
    fn merge_into(self, config: &mut FormattingConfig) {
        if let Some(keywords) = self.keywords {
            config.keywords = keywords;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub greeting: Option<String>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(greeting) = self.greeting {
            config.greeting = greeting;
        }
    }
}
