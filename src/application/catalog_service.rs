//! Album query resolution
//!
//! The service is the thin layer a query front end talks to: it validates
//! the incoming parameters, forwards them to the catalog provider and hands
//! the records back unchanged. Provider errors pass through untouched.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::album::{AlbumDetail, AlbumSummary};
use crate::domain::catalog::AlbumCatalog;
use crate::domain::catalog_query::AlbumListQuery;
use crate::infrastructure::catalog_error::{CatalogError, CatalogResult};

/// Resolver for the album list and album detail queries
#[derive(Debug)]
pub struct CatalogService<C: AlbumCatalog> {
    catalog: Arc<C>,
}

impl<C: AlbumCatalog> Clone for CatalogService<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C: AlbumCatalog> CatalogService<C> {
    pub fn new(catalog: C) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub const fn from_shared(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve an album list query; page numbers start at 1
    pub async fn albums(&self, query: AlbumListQuery) -> CatalogResult<Vec<AlbumSummary>> {
        if query.page == 0 {
            warn!("Rejected album list query with page 0");
            return Err(CatalogError::InvalidQuery("page must be a positive integer".to_string()));
        }

        debug!("Resolving albums query: {:?}", query);
        self.catalog.album_list(&query).await
    }

    /// Resolve a single album query
    pub async fn album(&self, album_id: &str) -> CatalogResult<AlbumDetail> {
        if album_id.trim().is_empty() {
            warn!("Rejected album query with empty id");
            return Err(CatalogError::InvalidQuery("album id must not be empty".to_string()));
        }

        debug!("Resolving album query: {}", album_id);
        self.catalog.album(album_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::album::Author;
    use crate::domain::catalog_query::{ProjectType, SortOrder};
    use crate::infrastructure::catalog_error::ErrorKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCatalog {
        list_queries: Mutex<Vec<AlbumListQuery>>,
        album_ids: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AlbumCatalog for RecordingCatalog {
        async fn album_list(&self, query: &AlbumListQuery) -> CatalogResult<Vec<AlbumSummary>> {
            self.list_queries.lock().unwrap().push(*query);
            Ok(vec![AlbumSummary {
                id: "emma-by-jane-austen".to_string(),
                title: "Emma".to_string(),
                cover: String::new(),
                author: Author::new("Jane Austen"),
                status: "Complete".to_string(),
                project_type: "Solo".to_string(),
                language: "English".to_string(),
                size: "35MB".to_string(),
                download_url: String::new(),
            }])
        }

        async fn album(&self, album_id: &str) -> CatalogResult<AlbumDetail> {
            self.album_ids.lock().unwrap().push(album_id.to_string());
            Err(CatalogError::Fetch {
                status: 404,
                url: format!("https://librivox.org/{album_id}/"),
            })
        }
    }

    #[tokio::test]
    async fn test_albums_forwards_query() {
        let service = CatalogService::new(RecordingCatalog::default());
        let query = AlbumListQuery::new(2)
            .with_project_type(ProjectType::Group)
            .with_order(SortOrder::Alpha);

        let albums = service.albums(query).await.unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(*service.catalog().list_queries.lock().unwrap(), vec![query]);
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected_without_provider_call() {
        let service = CatalogService::new(RecordingCatalog::default());

        let err = service.albums(AlbumListQuery::new(0)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery);
        assert!(service.catalog().list_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_album_errors_pass_through() {
        let service = CatalogService::new(RecordingCatalog::default());

        let err = service.album("emma").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert_eq!(err.status(), Some(404));
        assert_eq!(*service.catalog().album_ids.lock().unwrap(), vec!["emma".to_string()]);
    }

    #[tokio::test]
    async fn test_album_id_is_forwarded_unchanged() {
        let service = CatalogService::new(RecordingCatalog::default());

        let _ = service.album(" emma ").await;
        assert_eq!(*service.catalog().album_ids.lock().unwrap(), vec![" emma ".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_album_id_is_rejected() {
        let service = CatalogService::new(RecordingCatalog::default());
        let err = service.album("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery);
        assert!(service.catalog().album_ids.lock().unwrap().is_empty());
    }
}
