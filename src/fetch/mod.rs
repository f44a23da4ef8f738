//! Page fetching.
//!
//! One HTTP GET per URL, no retries. Only transport failures are errors:
//! a 404 or 500 response is still a page (`ok == false`) whose body is
//! kept.

mod request;

use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::error_handling::{fetch_error_from_reqwest, FetchError};

pub(crate) use request::RequestHeaders;

/// A fetched response: status, 2xx flag and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// HTTP status code
    pub status: u16,
    /// True for 2xx statuses
    pub ok: bool,
    /// Response body (may be empty)
    pub body: String,
}

impl RawPage {
    /// Builds a page from a status code, deriving `ok` from it.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.into(),
        }
    }
}

/// Retrieves the raw content of one URL.
///
/// The crawler drives every URL through an implementation of this trait.
/// Implementations must not share mutable state between calls.
pub trait PageFetcher: Send + Sync + 'static {
    /// Performs a single fetch of `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawPage, FetchError>> + Send;
}

/// `PageFetcher` backed by a shared `reqwest::Client`.
///
/// Redirects are followed according to the client's default policy; the
/// per-request timeout is the one configured on the client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Wraps a shared client, usually the one from `init_client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage, FetchError> {
        let request = RequestHeaders::apply_to_request_builder(self.client.get(url));
        let response = request
            .send()
            .await
            .map_err(|e| fetch_error_from_reqwest(url, &e))?;

        let status = response.status().as_u16();
        debug!("Fetched {url}: status {status}");

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error_from_reqwest(url, &e))?;

        Ok(RawPage::new(status, body))
    }
}
