use anyhow::Result;

use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

/// Config source that always yields the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter {
    pub overrides: Option<AppConfig>,
}

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.overrides.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter::default();
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn stub_config_returns_overrides() {
        let mut overrides = AppConfig::default();
        overrides.ui.greeting = "Welcome".to_owned();
        let adapter = StubConfigAdapter {
            overrides: Some(overrides.clone()),
        };

        assert_eq!(adapter.load().expect("stub config must load"), overrides);
    }
}
