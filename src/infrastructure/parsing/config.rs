//! Selector configuration for catalog extraction
//!
//! Centralized CSS selectors for the two catalog page types. Defaults match
//! the markup currently served by the catalog site; every field can be
//! overridden from the configuration file.

use serde::{Deserialize, Serialize};

/// All selectors used by the catalog parsers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSelectors {
    /// Search-results fragment selectors
    pub album_list: AlbumListSelectors,

    /// Album detail page selectors
    pub album_detail: AlbumDetailSelectors,
}

/// CSS selectors for the search-results fragment
///
/// All selectors except `result_block` are evaluated inside one result block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumListSelectors {
    /// One catalog result container per album
    pub result_block: String,

    /// Link to the album detail page (href carries the album id)
    pub detail_link: String,

    /// Heading holding the album title
    pub title: String,

    /// Cover image (src)
    pub cover: String,

    /// Author line, possibly followed by reader credits in parentheses
    pub author: String,

    /// Pipe-delimited "status | type | language" line
    pub meta: String,

    /// Archive size label
    pub size_label: String,

    /// Archive download link (href)
    pub download_link: String,
}

impl Default for AlbumListSelectors {
    fn default() -> Self {
        Self {
            result_block: ".catalog-result".to_string(),
            detail_link: ".result-data h3 a".to_string(),
            title: ".result-data h3".to_string(),
            cover: ".book-cover img".to_string(),
            author: ".book-author".to_string(),
            meta: ".book-meta".to_string(),
            size_label: ".download-btn span".to_string(),
            download_link: ".download-btn a".to_string(),
        }
    }
}

/// CSS selectors for the album detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumDetailSelectors {
    /// Main content container; title, cover, author, genre and description
    /// are looked up inside it
    pub page_container: String,

    pub title: String,
    pub cover: String,
    pub author: String,

    /// "Genre(s): ..." and "Language: ..." labels, in that order
    pub genre_labels: String,

    pub description: String,

    /// Rows of the episode table (document wide)
    pub episode_rows: String,

    /// Cells of one episode row
    pub episode_cells: String,

    /// Audio link inside the episode title cell
    pub episode_link: String,

    /// Running time, size and catalog date values (document wide)
    pub product_details: String,
}

impl Default for AlbumDetailSelectors {
    fn default() -> Self {
        Self {
            page_container: ".page".to_string(),
            title: "h1".to_string(),
            cover: ".book-page-book-cover img".to_string(),
            author: ".book-page-author".to_string(),
            genre_labels: ".book-page-genre".to_string(),
            description: ".description".to_string(),
            episode_rows: ".chapter-download tbody tr".to_string(),
            episode_cells: "td".to_string(),
            episode_link: "a".to_string(),
            product_details: ".product-details dd".to_string(),
        }
    }
}
