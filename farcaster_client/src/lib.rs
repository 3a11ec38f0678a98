mod error;
mod response;

use reqwest::{header, Client, Response, StatusCode, Url};

pub use crate::error::Error;
use crate::error::Result;
pub use crate::response::{Cast, CastAuthor};
use crate::response::{CastRequest, CastResponse, ErrorResponse};

const BASE_URL: &str = "https://api.warpcast.com/v2";

/// Client for the Warpcast HTTP API, authenticated with a bearer token.
#[derive(Clone)]
pub struct WarpcastClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for WarpcastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarpcastClient").field("base_url", &self.base_url).finish()
    }
}

impl WarpcastClient {
    pub fn new(token: &str) -> Result<WarpcastClient> {
        Self::with_base_url(token, BASE_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<WarpcastClient> {
        let mut auth =
            header::HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(WarpcastClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Whether the API answers its health endpoint with a success status.
    pub async fn healthcheck(&self) -> Result<bool> {
        let url = self.url("/healthcheck")?;
        let response = self.client.get(url).send().await?;
        Ok(response.status().is_success())
    }

    /// Publish `text` as a new cast, verbatim.
    pub async fn post_cast(&self, text: &str) -> Result<Cast> {
        let url = self.url("/casts")?;
        let response = self.client.post(url).json(&CastRequest { text }).send().await?;
        let response: CastResponse = self.read(response, "casts").await?;
        Ok(response.result.cast)
    }
}

impl WarpcastClient {
    fn url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| e.into())
    }

    async fn read<R>(&self, response: Response, name: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let content = response.text().await?;
        log(name, &content).await?;
        if !status.is_success() {
            return Err(api_error(status, &content));
        }
        serde_json::from_str(&content).map_err(|e| e.into())
    }
}

fn api_error(status: StatusCode, content: &str) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(content)
        .ok()
        .and_then(|e| e.message())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
    Error::ApiError {
        status: status.as_u16(),
        message,
    }
}

async fn log(name: &str, content: &str) -> Result<()> {
    use std::path::PathBuf;
    use tokio::{fs::File, io::AsyncWriteExt};

    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        let time = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filepath = PathBuf::from(dir).join(format!("warpcast_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
        tracing::debug!("Logged warpcast response {}", name);
    }
    Ok(())
}
