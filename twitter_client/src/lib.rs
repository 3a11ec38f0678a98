mod consts;
mod error;
mod response;
mod result;

use reqwest::{header, Client, Response, Url};
use tweetcast_util::build_params;

use consts::*;
use response::UserTweetsResponse;
pub use result::*;

pub use crate::error::Error;
use crate::error::Result;

/// Client for the RapidAPI mirror of the Twitter user timeline.
#[derive(Clone)]
pub struct TwitterClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterClient").field("base_url", &self.base_url).finish()
    }
}

impl TwitterClient {
    pub fn new(api_key: &str) -> Result<TwitterClient> {
        Self::with_base_url(api_key, API_BASE)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<TwitterClient> {
        let mut api_key = header::HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("x-rapidapi-host", header::HeaderValue::from_static(API_HOST));
        headers.insert("x-rapidapi-key", api_key);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(TwitterClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Most recent tweets of a user, newest first as the upstream orders them.
    pub async fn user_tweets(&self, user: &str, count: u32) -> Result<TimelineResult> {
        let params = build_params! { required user, required count };
        let response: UserTweetsResponse = self.get("/user-tweets", &params, user).await?;
        Ok(response.into())
    }
}

impl TwitterClient {
    async fn get<R>(&self, path: &str, params: &[(String, String)], name: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = Url::parse_with_params(&format!("{}{}", self.base_url, path), params)?;
        let response: Response = self.client.get(url).send().await?;

        let status_error = response.error_for_status_ref().err();
        let content = response.text().await?;
        let name = format!("{}_{}", path.trim_start_matches('/').replace('/', "_"), name);
        log(&name, &content).await?;
        if let Some(status_error) = status_error {
            return Err(status_error.into());
        }

        serde_json::from_str(&content).map_err(|e| e.into())
    }
}

async fn log(name: &str, content: &str) -> Result<()> {
    use std::path::PathBuf;
    use tokio::{fs::File, io::AsyncWriteExt};

    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        let name = name.replace([':', '/'], "_");
        let time = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filepath = PathBuf::from(dir).join(format!("twitter_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
        tracing::debug!("Logged twitter response {}", name);
    }
    Ok(())
}

/// Decode a raw `user-tweets` body without going through the network.
pub fn parse_user_tweets(content: &str) -> Result<TimelineResult> {
    let response: UserTweetsResponse = serde_json::from_str(content)?;
    Ok(response.into())
}
