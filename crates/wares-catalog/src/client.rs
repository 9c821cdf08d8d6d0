//! HTTP client for the product catalog

use url::Url;
use wares_core::prelude::*;
use wares_core::{Product, FETCH_FAILED_MSG};

use crate::response::decode_products;

/// Default catalog endpoint when no override is configured
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";

/// Client for the remote product catalog.
///
/// Holds a reusable [`reqwest::Client`] and the resolved endpoint. Cheap to
/// clone-by-reference from spawned tasks via `Arc`. Performs no retries and
/// enforces no timeout beyond the transport default, and never mutates app
/// state -- the caller applies results.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a client against a parsed endpoint
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Create a client from an endpoint string, validating it up front
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|err| {
            warn!("rejecting catalog endpoint {endpoint:?}: {err}");
            Error::invalid_endpoint(endpoint)
        })?;
        Ok(Self::new(url))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the product list.
    ///
    /// One GET against the endpoint. Transport failures, non-2xx statuses,
    /// and undecodable bodies all collapse into [`Error::Fetch`] carrying
    /// the fixed user-facing message; the distinguishing detail goes to the
    /// log. On success the batch is capped at the display limit with server
    /// order preserved.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        debug!("GET {}", self.endpoint);

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| {
                warn!("catalog request failed: {err}");
                Error::fetch(FETCH_FAILED_MSG)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("catalog returned HTTP {status}");
            return Err(Error::fetch(FETCH_FAILED_MSG));
        }

        let body = response.text().await.map_err(|err| {
            warn!("failed to read catalog response body: {err}");
            Error::fetch(FETCH_FAILED_MSG)
        })?;

        decode_products(&body)
    }
}
