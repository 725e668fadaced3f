//! Catalog client for the search and album endpoints
//!
//! Each call is a single request followed by synchronous extraction; the
//! parsed document never lives across an await point.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use super::catalog_error::{CatalogError, CatalogResult};
use super::config::CatalogConfig;
use super::parsing::{AlbumDetailParser, AlbumListParser, DetailParseContext, ParseContext};
use super::simple_http_client::{HttpClient, HttpClientConfig};
use crate::domain::album::{AlbumDetail, AlbumSummary};
use crate::domain::catalog::AlbumCatalog;
use crate::domain::catalog_query::{AlbumListQuery, Category, ProjectType, SortOrder};

/// Status flag of a successful search envelope
pub const SEARCH_SUCCESS_STATUS: &str = "SUCCESS";

const SEARCH_PATH: [&str; 2] = ["search", "get_results"];

/// JSON wrapper returned by the search endpoint
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    status: Option<serde_json::Value>,
    #[serde(default)]
    results: Option<serde_json::Value>,
}

/// Validate a search response body and return its HTML fragment
pub fn decode_search_envelope(body: &str) -> CatalogResult<String> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;

    match envelope.status {
        Some(serde_json::Value::String(status)) if status == SEARCH_SUCCESS_STATUS => {}
        other => {
            let status = match other {
                Some(serde_json::Value::String(status)) => status,
                Some(value) => value.to_string(),
                None => String::new(),
            };
            warn!("Search envelope status '{}'", status);
            return Err(CatalogError::Source { status });
        }
    }

    // A whitespace-only fragment is still a fragment, with no result blocks
    match envelope.results {
        Some(serde_json::Value::String(fragment)) if !fragment.is_empty() => Ok(fragment),
        _ => Err(CatalogError::EmptyResult),
    }
}

/// Client for the catalog site
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    base_url: Url,
    list_parser: AlbumListParser,
    detail_parser: AlbumDetailParser,
}

impl CatalogClient {
    /// Client for the public catalog site with default settings
    pub fn new() -> CatalogResult<Self> {
        Self::from_config(&CatalogConfig::default())
    }

    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let http = HttpClient::with_config(HttpClientConfig::from_catalog_config(config))?;
        Self::with_http_client(http, config)
    }

    /// Build on an existing HTTP client, sharing its connection pool
    pub fn with_http_client(http: HttpClient, config: &CatalogConfig) -> CatalogResult<Self> {
        let base_url = config.parsed_base_url()?;
        let list_parser = AlbumListParser::with_config(&config.selectors.album_list)?;
        let detail_parser = AlbumDetailParser::with_config(&config.selectors.album_detail)?;

        debug!("Catalog client for {}", base_url);
        Ok(Self {
            http,
            base_url,
            list_parser,
            detail_parser,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/search/get_results?search_category=..&search_page=..&search_order=..&project_type=..`
    pub fn search_url(&self, query: &AlbumListQuery) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::configuration("base_url", "URL cannot carry a path"))?
            .pop_if_empty()
            .extend(SEARCH_PATH);

        url.query_pairs_mut()
            .clear()
            .append_pair("search_category", query.category.as_query_token())
            .append_pair("search_page", &query.page.to_string())
            .append_pair("search_order", query.order.as_query_token())
            .append_pair("project_type", query.project_type.as_query_token());

        Ok(url)
    }

    /// `{base}/{album_id}/`
    pub fn album_url(&self, album_id: &str) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| CatalogError::configuration("base_url", "URL cannot carry a path"))?
            .pop_if_empty()
            .push(album_id)
            .push("");

        Ok(url)
    }

    /// Fetch one page of the catalog listing
    pub async fn fetch_album_list(
        &self,
        category: Category,
        page: u32,
        project_type: ProjectType,
        order: SortOrder,
    ) -> CatalogResult<Vec<AlbumSummary>> {
        let query = AlbumListQuery {
            page,
            category,
            project_type,
            order,
        };
        let url = self.search_url(&query)?;
        info!(
            "Fetching album list page {} ({} / {} / {})",
            page, category, project_type, order
        );

        let body = self.http.fetch_text(&url, true).await?;
        let fragment = decode_search_envelope(&body)?;

        let albums = self
            .list_parser
            .parse_fragment(&fragment, &ParseContext::new(self.base_url.clone()))?;
        info!("Album list page {}: {} albums", page, albums.len());
        Ok(albums)
    }

    /// Fetch and extract one album page
    pub async fn fetch_album_detail(&self, album_id: &str) -> CatalogResult<AlbumDetail> {
        let url = self.album_url(album_id)?;
        info!("Fetching album detail: {}", album_id);

        let body = self.http.fetch_text(&url, false).await?;
        let context = DetailParseContext::new(album_id, self.base_url.clone());
        let album = self.detail_parser.parse_document(&body, &context)?;

        info!("Album '{}': {} episodes", album_id, album.episodes.len());
        Ok(album)
    }
}

#[async_trait]
impl AlbumCatalog for CatalogClient {
    async fn album_list(&self, query: &AlbumListQuery) -> CatalogResult<Vec<AlbumSummary>> {
        self.fetch_album_list(query.category, query.page, query.project_type, query.order)
            .await
    }

    async fn album(&self, album_id: &str) -> CatalogResult<AlbumDetail> {
        self.fetch_album_detail(album_id).await
    }
}
