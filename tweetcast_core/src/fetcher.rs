use async_trait::async_trait;

use std::time::Duration;

use crate::error::Result;
use crate::post::{Account, Post};
use crate::util;

/// A platform posts are read from.
#[async_trait]
pub trait Source: Send + Sync {
    /// Short name used in logs, like `twitter`.
    fn name(&self) -> &str;

    /// Recent posts of `account` as the platform returns them, reshares included.
    /// `limit` is a hint for the request size; the result may be longer.
    async fn fetch(&self, account: &Account, limit: usize) -> Result<Vec<Post>>;
}

/// Fetch the most recent posts of an account with reshares removed,
/// truncated to `limit` after filtering.
pub async fn fetch_recent<S>(source: &S, account: &Account, limit: usize, timeout: Duration) -> Result<Vec<Post>>
where
    S: Source + ?Sized,
{
    let fetched = util::timeout(timeout, source.fetch(account, limit)).await?;
    let total = fetched.len();
    let posts: Vec<Post> = fetched.into_iter().filter(|p| !p.is_reshare()).take(limit).collect();
    tracing::debug!(
        "Fetched {} posts for {} from {}, kept {}",
        total,
        account,
        source.name(),
        posts.len()
    );
    Ok(posts)
}
