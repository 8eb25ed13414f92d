//! CLI execution context
//!
//! Shared state for one invocation: verbosity, the resolved API key, the
//! loaded configuration, and a lazily constructed API client so that help
//! and parse-failure paths never open a connection pool.

use crate::api::ApiClient;
use crate::config::{Config, ConfigManager};
use crate::errors::{AppError, AppResult};
use once_cell::sync::OnceCell;

pub struct CliContext {
    verbose: bool,
    api_key: Option<String>,
    config: Config,
    api: OnceCell<ApiClient>,
}

impl CliContext {
    /// Load configuration and build a fresh context.
    pub fn new() -> AppResult<Self> {
        let manager = ConfigManager::load()?;
        Ok(Self::from_config(manager.config().clone()))
    }

    pub fn from_config(config: Config) -> Self {
        CliContext {
            verbose: false,
            api_key: None,
            config,
            api: OnceCell::new(),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn log_level(&self) -> &str {
        &self.config.log.level
    }

    /// Key given on the command line; overrides environment and config.
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    fn resolve_api_key(&self) -> AppResult<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        if let Ok(key) = std::env::var("VIGIL_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        self.config
            .api
            .api_key
            .clone()
            .ok_or(AppError::MissingApiKey)
    }

    /// The API client, constructed on first use.
    pub fn api(&self) -> AppResult<&ApiClient> {
        self.api.get_or_try_init(|| {
            let key = self.resolve_api_key()?;
            ApiClient::connect(
                &self.config.api.endpoint,
                &key,
                self.config.api.timeout_secs.unwrap_or(30),
            )
        })
    }
}

#[cfg(test)]
pub(crate) fn test_context(api: ApiClient) -> CliContext {
    let context = CliContext::from_config(Config::default());
    context
        .api
        .set(api)
        .unwrap_or_else(|_| panic!("api client already set"));
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_key_wins_over_config() {
        let mut config = Config::default();
        config.api.api_key = Some("from-config".to_string());
        let mut context = CliContext::from_config(config);
        context.set_api_key("from-flag".to_string());

        assert_eq!(context.resolve_api_key().unwrap(), "from-flag");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let context = CliContext::from_config(Config::default());
        // Only meaningful when VIGIL_API_KEY is unset in the test env.
        if std::env::var("VIGIL_API_KEY").is_err() {
            assert!(matches!(
                context.resolve_api_key(),
                Err(AppError::MissingApiKey)
            ));
        }
    }
}
