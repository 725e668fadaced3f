//! Parsing context for catalog extraction
//!
//! Carries the information a parser needs beyond the markup itself.

use url::Url;

use crate::infrastructure::config::defaults::DEFAULT_BASE_URL;

/// Context for search-results fragments
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Base URL for resolving relative album links
    pub base_url: Url,
}

impl ParseContext {
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

/// Context for album detail pages
#[derive(Debug, Clone)]
pub struct DetailParseContext {
    /// Album identifier the page was requested for
    pub album_id: String,

    /// Base URL for resolving relative resources
    pub base_url: Url,
}

impl DetailParseContext {
    pub fn new(album_id: impl Into<String>, base_url: Url) -> Self {
        Self {
            album_id: album_id.into(),
            base_url,
        }
    }

    /// Context against the public catalog site
    pub fn for_album(album_id: impl Into<String>) -> Self {
        Self::new(album_id, default_base_url())
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}
