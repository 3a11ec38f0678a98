use async_trait::async_trait;

use farcaster_client::WarpcastClient;
use tweetcast_core::{relay::Relay, CastHash, Result};

/// Casts relayed posts to Farcaster through the Warpcast API.
#[derive(Debug, Clone)]
pub struct FarcasterRelay {
    client: WarpcastClient,
}

impl FarcasterRelay {
    pub fn new(secret: &str) -> Result<Self> {
        let client = WarpcastClient::new(secret).map_err(anyhow::Error::from)?;
        Ok(Self { client })
    }

    pub fn from_client(client: WarpcastClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Relay for FarcasterRelay {
    fn name(&self) -> &str {
        "farcaster"
    }

    async fn healthcheck(&self) -> Result<bool> {
        let healthy = self.client.healthcheck().await.map_err(anyhow::Error::from)?;
        Ok(healthy)
    }

    async fn post(&self, text: &str) -> Result<CastHash> {
        let cast = self.client.post_cast(text).await.map_err(anyhow::Error::from)?;
        tracing::debug!("Cast {} created by {:?}", cast.hash, cast.author.map(|a| a.fid));
        Ok(CastHash(cast.hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tweetcast_core::{relay, Error};

    fn unreachable() -> FarcasterRelay {
        // Nothing listens on the discard port
        FarcasterRelay::from_client(WarpcastClient::with_base_url("secret", "http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn test_post_unreachable_is_error() {
        let result = unreachable().post("hello").await;
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[tokio::test]
    async fn test_publish_survives_failed_healthcheck() {
        let relay = unreachable();
        assert!(relay.healthcheck().await.is_err());
        // The publish still attempts the post and reports its failure
        let result = relay::publish(&relay, "hello", Duration::from_secs(5)).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_secret() {
        assert!(FarcasterRelay::new("multi\nline").is_err());
    }
}
