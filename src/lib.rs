//! LibriVox Catalog - typed access to the LibriVox audiobook catalog
//!
//! The catalog site offers no structured API for its listings, so album
//! records are extracted from the search-results fragment and the album
//! detail page. The crate is layered as:
//! - `domain`: album records, query vocabulary, the `AlbumCatalog` seam
//! - `infrastructure`: HTTP client, markup extraction, config, logging
//! - `application`: query resolution on top of any `AlbumCatalog`

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the main entry points for easier access
pub use application::CatalogService;
pub use domain::{
    AlbumCatalog, AlbumDetail, AlbumListQuery, AlbumSummary, Author, Category, Episode,
    ProjectType, SortOrder,
};
pub use infrastructure::{
    CatalogClient, CatalogConfig, CatalogError, CatalogResult, ErrorKind, ParsingError,
    extract_album_detail, extract_album_list, parse_duration,
};
