use async_trait::async_trait;

use tweetcast_core::{fetcher::Source, Account, Post, Result};
use twitter_client::TwitterClient;

use crate::util;

/// Reads user timelines through the RapidAPI Twitter mirror.
#[derive(Debug, Clone)]
pub struct TwitterSource {
    client: TwitterClient,
}

impl TwitterSource {
    pub fn new(api_key: &str) -> Result<Self> {
        let client = TwitterClient::new(api_key).map_err(anyhow::Error::from)?;
        Ok(Self { client })
    }

    pub fn from_client(client: TwitterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for TwitterSource {
    fn name(&self) -> &str {
        "twitter"
    }

    async fn fetch(&self, account: &Account, limit: usize) -> Result<Vec<Post>> {
        let count = u32::try_from(limit).unwrap_or(u32::MAX);
        let result = self
            .client
            .user_tweets(account.as_str(), count)
            .await
            .map_err(anyhow::Error::from)?;
        if result.skipped > 0 {
            tracing::warn!("Skipped {} unusable tweets for {}", result.skipped, account);
        }
        Ok(result.tweets.iter().map(util::post).collect())
    }
}
