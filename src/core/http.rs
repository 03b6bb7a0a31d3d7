use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::error::{CatalogError, CatalogResult};

const APP_USER_AGENT: &str = concat!("fabric-catalog/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

    Client::builder()
        .user_agent(APP_USER_AGENT)
        .default_headers(default_headers)
        .build()
}

/// Source of upstream documents.
///
/// Every resolver talks to the network through this trait so the whole
/// pipeline can be driven from in-memory fixtures in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body at `url` as text. Any non-success status is a
    /// [`CatalogError::Transport`].
    async fn fetch_text(&self, url: &str) -> CatalogResult<String>;
}

/// Fetch `url` and deserialize its body as JSON.
pub async fn fetch_json<T, F>(fetcher: &F, url: &str) -> CatalogResult<T>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let body = fetcher.fetch_text(url).await?;
    Ok(serde_json::from_str(&body)?)
}

/// [`Fetcher`] backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> CatalogResult<Self> {
        Ok(Self::with_client(build_http_client()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> CatalogResult<String> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!("Request to {} failed: {}", url, e);
            CatalogError::Transport {
                url: url.to_string(),
                status: e.status().map(|s| s.as_u16()),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport {
                url: url.to_string(),
                status: Some(status.as_u16()),
            });
        }

        Ok(response.text().await?)
    }
}
