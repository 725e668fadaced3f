//! Domain module - catalog records, query vocabulary and the provider seam
//!
//! Each module is its own file in the domain/ directory; commonly used items
//! are re-exported here.

pub mod album;
pub mod catalog;
pub mod catalog_query;

pub use album::{AlbumDetail, AlbumSummary, Author, Episode};
pub use catalog::AlbumCatalog;
pub use catalog_query::{AlbumListQuery, Category, InvalidQueryToken, ProjectType, SortOrder};
