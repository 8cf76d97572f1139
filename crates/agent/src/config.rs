use clap::ValueEnum;
use query::{ContextStrategy, GenerationSettings, RetryPolicy, SearchSettings, DEFAULT_TOP_K};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const GENERATION_KEY_VAR: &str = "GEMINI_API_KEY";
pub const SEARCH_KEY_VAR: &str = "TAVILY_API_KEY";
pub const MODE_VAR: &str = "AGENT_MODE";
pub const DOCS_DIR_VAR: &str = "DOCS_DIR";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const GENERATION_URL_VAR: &str = "GEMINI_BASE_URL";
pub const SEARCH_URL_VAR: &str = "TAVILY_BASE_URL";
pub const MAX_RETRIES_VAR: &str = "GENERATION_MAX_RETRIES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0}; set it in the environment or .env")]
    MissingCredential(&'static str),
    #[error("no mode given; pass --mode or set AGENT_MODE")]
    MissingMode,
    #[error("invalid mode {0:?}; expected 'offline' or 'online'")]
    InvalidMode(String),
    #[error("invalid value {value:?} for {var}; expected a non-negative integer")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationMode {
    Offline, // Local documents only
    Online,  // Web search plus model knowledge
}

impl FromStr for OperationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// How offline context is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextMode {
    Ranked,
    Full,
}

/// Credential that never shows up in logs
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: OperationMode,
    pub data_dir: PathBuf,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    pub context: ContextMode,
    pub top_k: usize,
    pub char_budget: usize,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: Secret,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: Option<Secret>,
    pub base_url: String,
    pub max_results: usize,
    pub search_depth: String,
    pub request_timeout_secs: u64,
}

/// Values given on the command line; each wins over its environment variable.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<OperationMode>,
    pub data_dir: Option<PathBuf>,
    pub top_k: Option<usize>,
    pub context: Option<ContextMode>,
    pub char_budget: Option<usize>,
}

impl RetrievalConfig {
    pub fn strategy(&self) -> ContextStrategy {
        match self.context {
            ContextMode::Ranked => ContextStrategy::Ranked { top_k: self.top_k },
            ContextMode::Full => ContextStrategy::Full,
        }
    }
}

impl GenerationConfig {
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            api_key: self.api_key.expose().to_string(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
            retry: RetryPolicy::new(
                self.retry.max_retries,
                self.retry.initial_backoff_ms,
                self.retry.max_backoff_ms,
            ),
        }
    }
}

impl SearchConfig {
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            api_key: self.api_key.as_ref().map(|k| k.expose().to_string()),
            base_url: self.base_url.clone(),
            search_depth: self.search_depth.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl AppConfig {
    /// Build from the process environment
    pub fn from_env(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::load(overrides, |var| std::env::var(var).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn load<F>(overrides: &Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mode = match overrides.mode {
            Some(mode) => mode,
            None => get(MODE_VAR).ok_or(ConfigError::MissingMode)?.parse()?,
        };

        let api_key = get(GENERATION_KEY_VAR).ok_or(ConfigError::MissingCredential(GENERATION_KEY_VAR))?;

        let max_retries = match get(MAX_RETRIES_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: MAX_RETRIES_VAR,
                    value,
                })?,
            None => 2,
        };

        Ok(Self {
            mode,
            data_dir: overrides
                .data_dir
                .clone()
                .or_else(|| get(DOCS_DIR_VAR).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("data")),
            retrieval: RetrievalConfig {
                context: overrides.context.unwrap_or(ContextMode::Ranked),
                top_k: overrides.top_k.unwrap_or(DEFAULT_TOP_K),
                char_budget: overrides.char_budget.unwrap_or(ingest::DEFAULT_CHAR_BUDGET),
            },
            generation: GenerationConfig {
                api_key: Secret(api_key),
                model: get(MODEL_VAR).unwrap_or_else(|| "gemini-2.5-flash".to_string()),
                base_url: get(GENERATION_URL_VAR)
                    .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
                request_timeout_secs: 120,
                retry: RetryConfig {
                    max_retries,
                    initial_backoff_ms: 1000,
                    max_backoff_ms: 10000,
                },
            },
            search: SearchConfig {
                api_key: get(SEARCH_KEY_VAR).map(Secret),
                base_url: get(SEARCH_URL_VAR).unwrap_or_else(|| "https://api.tavily.com".to_string()),
                max_results: query::web_search::DEFAULT_MAX_RESULTS,
                search_depth: "basic".to_string(),
                request_timeout_secs: 30,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_missing_generation_key_fails() {
        let err = AppConfig::load(&Overrides::default(), env(&[(MODE_VAR, "offline")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredential(GENERATION_KEY_VAR));
    }

    #[test]
    fn test_empty_generation_key_counts_as_missing() {
        let vars = env(&[(MODE_VAR, "online"), (GENERATION_KEY_VAR, "  ")]);
        let err = AppConfig::load(&Overrides::default(), vars).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredential(GENERATION_KEY_VAR));
    }

    #[test]
    fn test_mode_from_env_and_override() {
        let vars = env(&[(MODE_VAR, "Online"), (GENERATION_KEY_VAR, "k")]);
        let config = AppConfig::load(&Overrides::default(), &vars).unwrap();
        assert_eq!(config.mode, OperationMode::Online);

        let overrides = Overrides {
            mode: Some(OperationMode::Offline),
            ..Default::default()
        };
        let config = AppConfig::load(&overrides, &vars).unwrap();
        assert_eq!(config.mode, OperationMode::Offline);
    }

    #[test]
    fn test_missing_and_invalid_mode() {
        let err = AppConfig::load(&Overrides::default(), env(&[(GENERATION_KEY_VAR, "k")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingMode);

        let vars = env(&[(MODE_VAR, "hybrid"), (GENERATION_KEY_VAR, "k")]);
        let err = AppConfig::load(&Overrides::default(), vars).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMode("hybrid".to_string()));
    }

    #[test]
    fn test_defaults() {
        let vars = env(&[(MODE_VAR, "offline"), (GENERATION_KEY_VAR, "k")]);
        let config = AppConfig::load(&Overrides::default(), vars).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.retrieval.strategy(), ContextStrategy::Ranked { top_k: 3 });
        assert_eq!(config.retrieval.char_budget, 7000);
        assert_eq!(config.generation.model, "gemini-2.5-flash");
        assert_eq!(config.generation.retry.max_retries, 2);
        assert!(config.search.api_key.is_none());
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.request_timeout_secs, 30);
    }

    #[test]
    fn test_overrides_win() {
        let vars = env(&[
            (MODE_VAR, "offline"),
            (GENERATION_KEY_VAR, "k"),
            (DOCS_DIR_VAR, "/from/env"),
            (SEARCH_KEY_VAR, "s"),
            (MAX_RETRIES_VAR, "0"),
        ]);
        let overrides = Overrides {
            data_dir: Some(PathBuf::from("/from/flag")),
            top_k: Some(7),
            context: Some(ContextMode::Full),
            char_budget: Some(100),
            ..Default::default()
        };
        let config = AppConfig::load(&overrides, vars).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(config.retrieval.strategy(), ContextStrategy::Full);
        assert_eq!(config.retrieval.top_k, 7);
        assert_eq!(config.retrieval.char_budget, 100);
        assert_eq!(config.generation.retry.max_retries, 0);
        assert_eq!(config.search.api_key.as_ref().map(Secret::expose), Some("s"));
    }

    #[test]
    fn test_bad_retry_count() {
        let vars = env(&[(MODE_VAR, "offline"), (GENERATION_KEY_VAR, "k"), (MAX_RETRIES_VAR, "lots")]);
        let err = AppConfig::load(&Overrides::default(), vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: MAX_RETRIES_VAR, .. }));
    }

    #[test]
    fn test_secret_is_redacted() {
        let vars = env(&[(MODE_VAR, "offline"), (GENERATION_KEY_VAR, "super-secret")]);
        let config = AppConfig::load(&Overrides::default(), vars).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
