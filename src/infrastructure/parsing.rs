//! HTML extraction for the catalog site
//!
//! Two page types are understood: the search-results fragment embedded in
//! the search envelope, and the album detail page. Parsers are built from
//! named extraction rules (see [`rules`]) compiled from a selector
//! configuration, and never perform network I/O.

pub mod album_detail_parser;
pub mod album_list_parser;
pub mod config;
pub mod context;
pub mod duration;
pub mod links;
pub mod rules;
pub mod text;

// Re-export public types
pub use super::parsing_error::{ParsingError, ParsingResult};
pub use album_detail_parser::AlbumDetailParser;
pub use album_list_parser::AlbumListParser;
pub use config::{AlbumDetailSelectors, AlbumListSelectors, CatalogSelectors};
pub use context::{DetailParseContext, ParseContext};
pub use duration::parse_duration;

use scraper::Html;

use crate::domain::album::{AlbumDetail, AlbumSummary};

/// Parser over an already parsed document with a typed context
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse HTML with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}

/// Extract album summaries from a search-results fragment using the default
/// selectors and the public site base URL
pub fn extract_album_list(fragment: &str) -> ParsingResult<Vec<AlbumSummary>> {
    AlbumListParser::new()?.parse_fragment(fragment, &ParseContext::default())
}

/// Extract the full album record from an album page using the default
/// selectors
pub fn extract_album_detail(album_id: &str, page: &str) -> ParsingResult<AlbumDetail> {
    AlbumDetailParser::new()?.parse_document(page, &DetailParseContext::for_album(album_id))
}
