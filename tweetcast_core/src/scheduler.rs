// The polling loop: fetch every account, relay what is new, persist what was seen, sleep.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tweetcast_util::ParsingError;

use crate::cache::{CacheStore, DEFAULT_CACHE_PATH};
use crate::error::Result;
use crate::fetcher::{self, Source};
use crate::post::{Account, Post, SNAPSHOT_LIMIT};
use crate::registry::AccountRegistry;
use crate::relay::{self, Relay};
use crate::{dedup, Snapshot};

pub const DEFAULT_COOLDOWN_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30000;

/// What a failed fetch does to the cached entry of that account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Replace the entry with the empty result, so every post counts as new
    /// on the next successful fetch.
    #[default]
    Overwrite,
    /// Leave the entry as it was before the failed fetch.
    Keep,
}

impl FromStr for FetchFailurePolicy {
    type Err = ParsingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "keep" => Ok(Self::Keep),
            _ => Err(ParsingError::InvalidChoice {
                key: "FETCH_FAILURE_POLICY".to_string(),
                value: s.to_string(),
                expected: "overwrite, keep".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub accounts: AccountRegistry,
    pub cache_path: PathBuf,
    /// Posts kept per account.
    pub fetch_limit: usize,
    pub cooldown: Duration,
    /// Bound for each fetch, healthcheck and post call.
    pub request_timeout: Duration,
    pub fetch_failure_policy: FetchFailurePolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            accounts: AccountRegistry::default(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            fetch_limit: SNAPSHOT_LIMIT,
            cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            fetch_failure_policy: FetchFailurePolicy::default(),
        }
    }
}

/// Counters of one cycle, logged when it finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub accounts: usize,
    pub fetched: usize,
    pub new: usize,
    pub relayed: usize,
    pub relay_failures: usize,
    pub fetch_failures: usize,
}

impl Display for CycleReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} accounts, {} fetched, {} new, {} relayed, {} relay failures, {} fetch failures",
            self.accounts, self.fetched, self.new, self.relayed, self.relay_failures, self.fetch_failures
        )
    }
}

pub struct Scheduler<S, R> {
    config: SchedulerConfig,
    source: S,
    relay: R,
    store: CacheStore,
}

impl<S: Source, R: Relay> Scheduler<S, R> {
    pub fn new(config: SchedulerConfig, source: S, relay: R) -> Self {
        let store = CacheStore::new(config.cache_path.clone());
        Self {
            config,
            source,
            relay,
            store,
        }
    }

    /// Run cycles forever. Only cache failures end the loop.
    pub async fn run(&self) -> Result<()> {
        loop {
            let report = self.run_cycle().await?;
            tracing::info!("Cycle done: {}", report);
            tracing::info!("Sleeping for {} seconds...", self.config.cooldown.as_secs());
            tokio::time::sleep(self.config.cooldown).await;
        }
    }

    /// One full pass over the configured accounts.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let accounts = self.config.accounts.list_accounts();
        let mut snapshot = self.store.load().await?;
        let mut report = CycleReport {
            accounts: accounts.len(),
            ..Default::default()
        };

        for account in accounts {
            self.process_account(account, &mut snapshot, &mut report).await;
        }

        self.store.save(&snapshot).await?;
        Ok(report)
    }

    async fn process_account(&self, account: Account, snapshot: &mut Snapshot, report: &mut CycleReport) {
        // 1. Fetch, failures stay inside this account
        let fetched = fetcher::fetch_recent(
            &self.source,
            &account,
            self.config.fetch_limit,
            self.config.request_timeout,
        )
        .await;
        let posts = match fetched {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error fetching posts for {}: {}", account, e);
                report.fetch_failures += 1;
                match self.config.fetch_failure_policy {
                    FetchFailurePolicy::Overwrite => vec![],
                    FetchFailurePolicy::Keep => return,
                }
            }
        };
        report.fetched += posts.len();

        // 2. Compare against the cached entry
        let first_observation = !snapshot.contains(&account);
        let new_posts = dedup::diff(&posts, snapshot.get(&account));
        if first_observation && !new_posts.is_empty() {
            tracing::info!(
                "First observation of {}: all {} fetched posts count as new",
                account,
                new_posts.len()
            );
        }
        report.new += new_posts.len();

        // 3. Relay in fetched order; failures are not retried
        for post in &new_posts {
            self.relay_post(&account, post, report).await;
        }

        // 4. The entry is replaced, never merged
        snapshot.replace(account, posts);
    }

    async fn relay_post(&self, account: &Account, post: &Post, report: &mut CycleReport) {
        tracing::info!("New post for {}:", account);
        tracing::info!("Text: {}", post.text);
        tracing::info!("URL: {}", post.url);
        match relay::publish(&self.relay, &post.text, self.config.request_timeout).await {
            Ok(_) => report.relayed += 1,
            Err(e) => {
                tracing::error!("Error relaying post {} of {}: {}", post.id, account, e);
                report.relay_failures += 1;
            }
        }
    }
}
