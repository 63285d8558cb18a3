//! HTTP client wrapper - GETs one URL and decodes the body as JSON

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::Value;

use crate::network::error::FetchError;

/// Something that can GET a URL and hand back a decoded JSON body
pub trait Fetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value, FetchError>>;
}

/// `Fetcher` backed by a shared `reqwest::Client`
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: create_client(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value, FetchError>> {
        execute_get(&self.client, url).boxed()
    }
}

/// Execute a plain GET: no extra headers, no body
pub async fn execute_get(client: &reqwest::Client, url: &str) -> Result<Value, FetchError> {
    tracing::info!(url, "Executing request");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::transport(&e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = resp.bytes().await.map_err(|e| FetchError::transport(&e))?;
    let value = serde_json::from_slice::<Value>(&body)?;

    tracing::info!(url, status = status.as_u16(), bytes = body.len(), "Request completed");
    Ok(value)
}

/// Create an HTTP client with default configuration.
///
/// No timeout is configured; a request stays pending until the peer answers
/// or the connection fails.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
