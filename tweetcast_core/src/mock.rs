// In-memory source and relay for tests. Clones share state so a test can keep
// a handle while the scheduler owns the other.

use async_trait::async_trait;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::fetcher::Source;
use crate::post::{Account, CastHash, Post};
use crate::relay::Relay;

pub fn post(id: &str, text: &str) -> Post {
    Post {
        id: id.to_string(),
        text: text.to_string(),
        url: format!("https://twitter.com/alice/status/{}", id),
    }
}

pub fn posts(ids: &[&str]) -> Vec<Post> {
    ids.iter().map(|id| post(id, &format!("post {}", id))).collect()
}

pub fn ids(posts: &[Post]) -> Vec<String> {
    posts.iter().map(|p| p.id.clone()).collect()
}

type Timeline = std::result::Result<Vec<Post>, String>;

#[derive(Debug, Clone, Default)]
pub struct MockSource {
    timelines: Arc<Mutex<HashMap<String, Timeline>>>,
    fetched: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, account: &str, posts: Vec<Post>) -> Self {
        self.set_posts(account, posts);
        self
    }

    pub fn with_failure(self, account: &str, error: &str) -> Self {
        self.set_failure(account, error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_posts(&self, account: &str, posts: Vec<Post>) {
        self.timelines.lock().unwrap().insert(account.to_string(), Ok(posts));
    }

    pub fn set_failure(&self, account: &str, error: &str) {
        self.timelines
            .lock()
            .unwrap()
            .insert(account.to_string(), Err(error.to_string()));
    }

    /// Accounts fetched so far, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, account: &Account, _limit: usize) -> Result<Vec<Post>> {
        self.fetched.lock().unwrap().push(account.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let timeline = self.timelines.lock().unwrap().get(account.as_str()).cloned();
        match timeline {
            Some(Ok(posts)) => Ok(posts),
            Some(Err(e)) => Err(Error::Other(anyhow::anyhow!(e))),
            None => Ok(vec![]),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRelay {
    posted: Arc<Mutex<Vec<String>>>,
    attempts: Arc<Mutex<usize>>,
    healthchecks: Arc<Mutex<usize>>,
    failing_texts: HashSet<String>,
    failing_healthcheck: bool,
}

impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject posts with exactly this text.
    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing_texts.insert(text.to_string());
        self
    }

    pub fn with_failing_healthcheck(mut self) -> Self {
        self.failing_healthcheck = true;
        self
    }

    /// Texts accepted so far, in order.
    pub fn posted(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn healthchecks(&self) -> usize {
        *self.healthchecks.lock().unwrap()
    }
}

#[async_trait]
impl Relay for MockRelay {
    fn name(&self) -> &str {
        "mock"
    }

    async fn healthcheck(&self) -> Result<bool> {
        *self.healthchecks.lock().unwrap() += 1;
        if self.failing_healthcheck {
            return Err(Error::Other(anyhow::anyhow!("connection refused")));
        }
        Ok(true)
    }

    async fn post(&self, text: &str) -> Result<CastHash> {
        *self.attempts.lock().unwrap() += 1;
        if self.failing_texts.contains(text) {
            return Err(Error::Other(anyhow::anyhow!("rejected: {}", text)));
        }
        let mut posted = self.posted.lock().unwrap();
        posted.push(text.to_string());
        Ok(CastHash(format!("0x{}", posted.len())))
    }
}
