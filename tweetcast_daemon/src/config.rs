use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use tweetcast_core::cache::DEFAULT_CACHE_PATH;
use tweetcast_core::post::SNAPSHOT_LIMIT;
use tweetcast_core::registry::AccountRegistry;
use tweetcast_core::scheduler::{
    FetchFailurePolicy, SchedulerConfig, DEFAULT_COOLDOWN_SECS, DEFAULT_REQUEST_TIMEOUT_MS,
};
use tweetcast_util::{parse_integer_in, parse_millis, parse_seconds, ParsingError};

use crate::error::{ConfigError, Result};

pub const ACCOUNT_IDS: &str = "ACCOUNT_IDS";
pub const SOURCE_API_KEY: &str = "SOURCE_API_KEY";
pub const RELAY_MNEMONIC: &str = "RELAY_MNEMONIC";
pub const COOLDOWN_SECONDS: &str = "COOLDOWN_SECONDS";
pub const CACHE_PATH: &str = "CACHE_PATH";
pub const FETCH_LIMIT: &str = "FETCH_LIMIT";
pub const FETCH_FAILURE_POLICY: &str = "FETCH_FAILURE_POLICY";
pub const REQUEST_TIMEOUT_MS: &str = "REQUEST_TIMEOUT_MS";

pub const REQUIRED_KEYS: &[&str] = &[ACCOUNT_IDS, SOURCE_API_KEY, RELAY_MNEMONIC];

/// Everything the daemon reads from its environment, parsed once at startup.
#[derive(Clone)]
pub struct Config {
    pub source_api_key: String,
    /// Without it every relay is skipped.
    pub relay_mnemonic: Option<String>,
    pub scheduler: SchedulerConfig,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("source_api_key", &"<redacted>")
            .field("relay_mnemonic", &self.relay_mnemonic.as_ref().map(|_| "<redacted>"))
            .field("scheduler", &self.scheduler)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key-value lookup. Blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source_api_key = get(SOURCE_API_KEY).ok_or(ConfigError::Missing(SOURCE_API_KEY))?;
        let relay_mnemonic = get(RELAY_MNEMONIC);

        let cooldown = match get(COOLDOWN_SECONDS) {
            Some(v) => parse_seconds(COOLDOWN_SECONDS, &v)?,
            None => Duration::from_secs(DEFAULT_COOLDOWN_SECS),
        };
        let request_timeout = match get(REQUEST_TIMEOUT_MS) {
            Some(v) => parse_millis(REQUEST_TIMEOUT_MS, &v)?,
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };
        let fetch_limit = match get(FETCH_LIMIT) {
            Some(v) => parse_fetch_limit(&v)?,
            None => SNAPSHOT_LIMIT,
        };
        let fetch_failure_policy = match get(FETCH_FAILURE_POLICY) {
            Some(v) => v.parse::<FetchFailurePolicy>()?,
            None => FetchFailurePolicy::default(),
        };
        let cache_path = PathBuf::from(get(CACHE_PATH).unwrap_or_else(|| DEFAULT_CACHE_PATH.to_string()));

        Ok(Config {
            source_api_key,
            relay_mnemonic,
            scheduler: SchedulerConfig {
                accounts: AccountRegistry::new(get(ACCOUNT_IDS).unwrap_or_default()),
                cache_path,
                fetch_limit,
                cooldown,
                request_timeout,
                fetch_failure_policy,
            },
        })
    }
}

/// Posts kept per account, between 1 and the snapshot bound.
fn parse_fetch_limit(value: &str) -> Result<usize> {
    let max = SNAPSHOT_LIMIT as u64;
    let limit = parse_integer_in(FETCH_LIMIT, value, 1..=max)?;
    let limit = usize::try_from(limit).map_err(|_| ParsingError::OutOfRange {
        key: FETCH_LIMIT.to_string(),
        value: value.to_string(),
        min: 1,
        max,
    })?;
    Ok(limit)
}

/// Required keys that are absent or blank.
pub fn missing_keys(lookup: impl Fn(&str) -> Option<String>) -> Vec<&'static str> {
    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|&key| lookup(key).map_or(true, |v| v.trim().is_empty()))
        .collect()
}
