use crate::{domain::formatting::KeywordSet, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub keywords: KeywordSet,
}

impl AppContext {
    pub fn new(config: AppConfig, keywords: KeywordSet) -> Self {
        Self { config, keywords }
    }
}
