//! Catalog provider interface
//!
//! Implemented by the HTTP catalog client; the resolver layer depends only on
//! this trait.

use async_trait::async_trait;

use crate::domain::album::{AlbumDetail, AlbumSummary};
use crate::domain::catalog_query::AlbumListQuery;
use crate::infrastructure::catalog_error::CatalogResult;

#[async_trait]
pub trait AlbumCatalog: Send + Sync {
    /// One page of album summaries in the site's listing order
    async fn album_list(&self, query: &AlbumListQuery) -> CatalogResult<Vec<AlbumSummary>>;

    /// Full record for one album
    async fn album(&self, album_id: &str) -> CatalogResult<AlbumDetail>;
}
