use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::formatting::KeywordSet,
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    usecases::context::AppContext,
};

/// Loads config, starts file logging and compiles the keyword set.
///
/// Keep the returned guard alive until exit so buffered log lines flush.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    let guard = infra::logging::init(&context.config.logging)?;

    tracing::info!(
        endpoint = %context.config.api.endpoint,
        keywords = context.keywords.keywords().len(),
        "lexchat bootstrapped"
    );

    Ok((context, guard))
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load().map_err(AppError::Other)?;
    let keywords =
        KeywordSet::new(&config.formatting.keywords).map_err(AppError::KeywordPattern)?;

    Ok(AppContext::new(config, keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{config::AppConfig, stubs::StubConfigAdapter};

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(&FileConfigAdapter::new(Some(Path::new(
            "./missing-config.toml",
        ))))
        .expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
        assert_eq!(context.keywords.keywords().len(), 10);
    }

    #[test]
    fn compiles_configured_vocabulary() {
        let mut overrides = AppConfig::default();
        overrides.formatting.keywords = vec!["bail".to_owned(), " ".to_owned()];

        let context = build_context(&StubConfigAdapter {
            overrides: Some(overrides),
        })
        .expect("context should build");

        assert_eq!(context.keywords.keywords(), ["bail".to_owned()]);
    }
}
