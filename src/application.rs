//! Application layer module
//!
//! Query resolution on top of an [`AlbumCatalog`](crate::domain::AlbumCatalog).

pub mod catalog_service;

pub use catalog_service::CatalogService;
