//! Infrastructure layer for HTTP access, HTML extraction and process setup
//!
//! This module provides the catalog HTTP client, the markup extractor,
//! configuration loading and logging initialization.

pub mod catalog_client;
pub mod catalog_error;
pub mod config;
pub mod logging;
pub mod parsing;
pub mod parsing_error;
pub mod simple_http_client;

// Re-export commonly used items
pub use catalog_client::CatalogClient;
pub use catalog_error::{CatalogError, CatalogResult, ErrorKind};
pub use config::{AppConfig, CatalogConfig, ConfigManager, LoggingConfig};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{
    AlbumDetailParser, AlbumListParser, ParsingError, ParsingResult, extract_album_detail,
    extract_album_list, parse_duration,
};
pub use simple_http_client::{HttpClient, HttpClientConfig};
