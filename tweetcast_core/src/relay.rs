use async_trait::async_trait;

use std::time::Duration;

use crate::error::{Error, Result};
use crate::post::CastHash;
use crate::util;

/// A network new posts are forwarded to.
#[async_trait]
pub trait Relay: Send + Sync {
    /// Short name used in logs, like `farcaster`.
    fn name(&self) -> &str;

    /// A relay without credentials skips every post.
    fn enabled(&self) -> bool {
        true
    }

    /// Connectivity check against the destination network.
    async fn healthcheck(&self) -> Result<bool>;

    /// Post `text` verbatim and return the network's confirmation.
    async fn post(&self, text: &str) -> Result<CastHash>;
}

/// Forward `text` to the relay. The healthcheck result is only logged.
/// There is no retry: a failed post is reported once and then forgotten.
pub async fn publish<R>(relay: &R, text: &str, timeout: Duration) -> Result<CastHash>
where
    R: Relay + ?Sized,
{
    if !relay.enabled() {
        tracing::warn!("{} relay is not configured. Skipping post", relay.name());
        return Err(Error::RelayDisabled(relay.name().to_string()));
    }

    match util::timeout(timeout, relay.healthcheck()).await {
        Ok(true) => tracing::debug!("{} healthcheck: ok", relay.name()),
        Ok(false) => tracing::warn!("{} healthcheck: unhealthy, posting anyway", relay.name()),
        Err(e) => tracing::warn!("{} healthcheck failed: {}", relay.name(), e),
    }

    let hash = util::timeout(timeout, relay.post(text)).await?;
    tracing::info!("Relayed post to {}. Hash: {}", relay.name(), hash);
    Ok(hash)
}

/// Stand-in used when no relay credentials are configured.
#[derive(Debug, Clone, Default)]
pub struct DisabledRelay;

#[async_trait]
impl Relay for DisabledRelay {
    fn name(&self) -> &str {
        "disabled"
    }

    fn enabled(&self) -> bool {
        false
    }

    async fn healthcheck(&self) -> Result<bool> {
        Ok(false)
    }

    async fn post(&self, _text: &str) -> Result<CastHash> {
        Err(Error::RelayDisabled(self.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRelay;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_publish_checks_health_then_posts() {
        let relay = MockRelay::new();
        let hash = publish(&relay, "  hello\nworld ", TIMEOUT).await.unwrap();
        assert_eq!(hash, CastHash("0x1".to_string()));
        assert_eq!(relay.healthchecks(), 1);
        assert_eq!(relay.posted(), ["  hello\nworld "]);
    }

    #[tokio::test]
    async fn test_publish_ignores_failed_healthcheck() {
        let relay = MockRelay::new().with_failing_healthcheck();
        assert!(publish(&relay, "still posted", TIMEOUT).await.is_ok());
        assert_eq!(relay.posted(), ["still posted"]);
    }

    #[tokio::test]
    async fn test_publish_reports_post_failure() {
        let relay = MockRelay::new().failing_on("bad");
        assert!(publish(&relay, "bad", TIMEOUT).await.is_err());
        assert!(relay.posted().is_empty());
        assert_eq!(relay.attempts(), 1);
    }

    #[tokio::test]
    async fn test_publish_disabled_relay() {
        let result = publish(&DisabledRelay, "hello", TIMEOUT).await;
        assert!(matches!(result, Err(Error::RelayDisabled(_))));
    }
}
