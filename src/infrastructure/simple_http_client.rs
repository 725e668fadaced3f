//! HTTP client for the catalog site
//!
//! A thin `reqwest` wrapper: one connection pool, a fixed user agent, an
//! optional timeout, and a single rule for responses, which is that anything
//! other than `200 OK` is a fetch failure. No retries, no rate limiting and
//! no cookie store.

use reqwest::{Client, ClientBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use super::catalog_error::{CatalogError, CatalogResult};
use super::config::CatalogConfig;
use super::config::defaults::DEFAULT_USER_AGENT;

/// Header the search endpoint requires to answer with its JSON envelope
pub const X_REQUESTED_WITH: &str = "X-Requested-With";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Configuration for HTTP client behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Request timeout in seconds; `None` means unbounded
    pub timeout_seconds: Option<u64>,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create HttpClientConfig from CatalogConfig
    pub fn from_catalog_config(catalog_config: &CatalogConfig) -> Self {
        Self {
            timeout_seconds: catalog_config.request_timeout_seconds,
            user_agent: catalog_config.user_agent.clone(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Shared HTTP client; cheap to clone
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> CatalogResult<Self> {
        let mut builder = ClientBuilder::new().user_agent(&config.user_agent).gzip(true).brotli(true);

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET a URL, failing with [`CatalogError::Fetch`] on any status but 200
    ///
    /// The body of a failed response is never read.
    pub async fn fetch_response(&self, url: &Url, xhr: bool) -> CatalogResult<Response> {
        info!("🌐 HTTP GET: {}", url);

        let mut request = self.client.get(url.clone());
        if xhr {
            request = request.header(X_REQUESTED_WITH, XML_HTTP_REQUEST);
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            error!("❌ HTTP error {}: {}", status, url);
            return Err(CatalogError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        debug!("✅ HTTP {} from {}", status, url);
        Ok(response)
    }

    /// GET a URL and return the body as text
    pub async fn fetch_text(&self, url: &Url, xhr: bool) -> CatalogResult<String> {
        let response = self.fetch_response(url, xhr).await?;
        let body = response.text().await?;
        debug!("Read {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
