//! Album list parser for the search-results fragment
//!
//! Extraction is all-or-nothing: a result block missing any required child
//! fails the whole page instead of being skipped.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::config::AlbumListSelectors;
use super::context::ParseContext;
use super::links::album_id_from_href;
use super::rules::ExtractionRule;
use super::text::{split_meta_line, strip_author_credits};
use super::{ContextualParser, ParsingResult};
use crate::domain::album::{AlbumSummary, Author};

/// Parser for extracting album summaries from search-results markup
#[derive(Debug, Clone)]
pub struct AlbumListParser {
    result_block: ExtractionRule,
    detail_link: ExtractionRule,
    title: ExtractionRule,
    cover: ExtractionRule,
    author: ExtractionRule,
    meta: ExtractionRule,
    size_label: ExtractionRule,
    download_link: ExtractionRule,
}

impl AlbumListParser {
    /// Create a parser with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&AlbumListSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_config(selectors: &AlbumListSelectors) -> ParsingResult<Self> {
        Ok(Self {
            result_block: ExtractionRule::optional("result_block", &selectors.result_block)?,
            detail_link: ExtractionRule::required("detail_link", &selectors.detail_link)?,
            title: ExtractionRule::required("title", &selectors.title)?,
            cover: ExtractionRule::required("cover", &selectors.cover)?,
            author: ExtractionRule::required("author", &selectors.author)?,
            meta: ExtractionRule::required("meta", &selectors.meta)?,
            size_label: ExtractionRule::required("size_label", &selectors.size_label)?,
            download_link: ExtractionRule::required("download_link", &selectors.download_link)?,
        })
    }

    /// Parse a raw HTML fragment as returned in the search envelope
    pub fn parse_fragment(&self, fragment: &str, context: &ParseContext) -> ParsingResult<Vec<AlbumSummary>> {
        let html = Html::parse_fragment(fragment);
        self.parse_with_context(&html, context)
    }

    fn extract_summary(&self, block: ElementRef<'_>, context: &ParseContext) -> ParsingResult<AlbumSummary> {
        let href = self.detail_link.attr(block, "href")?;
        let id = album_id_from_href(&href, &context.base_url)?;
        let title = self.title.text(block)?;
        let cover = self.cover.attr(block, "src")?;
        let author = strip_author_credits(&self.author.text(block)?);
        let meta = split_meta_line(&self.meta.text(block)?);
        let size = self.size_label.text(block)?;
        let download_url = self.download_link.attr(block, "href")?;

        Ok(AlbumSummary {
            id,
            title,
            cover,
            author: Author::new(author),
            status: meta.status,
            project_type: meta.project_type,
            language: meta.language,
            size,
            download_url,
        })
    }
}

impl ContextualParser for AlbumListParser {
    type Output = Vec<AlbumSummary>;
    type Context = ParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let blocks = self.result_block.select_all(html.root_element())?;
        debug!("Found {} catalog result blocks", blocks.len());

        let albums = blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| {
                self.extract_summary(block, context).inspect_err(|e| {
                    debug!("Catalog result block {} failed: {}", index, e);
                })
            })
            .collect::<ParsingResult<Vec<_>>>()?;

        debug!("Extracted {} album summaries", albums.len());
        Ok(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::ParsingError;

    const BLOCK: &str = r#"
        <li class="catalog-result">
            <a class="book-cover" href="https://librivox.org/the-raven-by-edgar-allan-poe/">
                <img src="https://archive.org/raven.jpg" alt="">
            </a>
            <div class="result-data">
                <h3><a href="https://librivox.org/the-raven-by-edgar-allan-poe/">The Raven</a></h3>
                <p class="book-author"> <a href="/author/1">Edgar Allan Poe</a> (1809 - 1849) </p>
                <p class="book-meta">Complete | Group | English</p>
            </div>
            <div class="download-btn">
                <a href="https://archive.org/raven.zip">Download</a>
                <span>12MB</span>
            </div>
        </li>"#;

    #[test]
    fn test_parse_single_block() {
        let parser = AlbumListParser::new().unwrap();
        let albums = parser.parse_fragment(BLOCK, &ParseContext::default()).unwrap();

        assert_eq!(albums.len(), 1);
        let album = &albums[0];
        assert_eq!(album.id, "the-raven-by-edgar-allan-poe");
        assert_eq!(album.title, "The Raven");
        assert_eq!(album.cover, "https://archive.org/raven.jpg");
        assert_eq!(album.author.name, "Edgar Allan Poe");
        assert_eq!(album.status, "Complete");
        assert_eq!(album.project_type, "Group");
        assert_eq!(album.language, "English");
        assert_eq!(album.size, "12MB");
        assert_eq!(album.download_url, "https://archive.org/raven.zip");
    }

    #[test]
    fn test_empty_fragment_yields_no_albums() {
        let parser = AlbumListParser::new().unwrap();
        let albums = parser.parse_fragment("<p>No results</p>", &ParseContext::default()).unwrap();
        assert!(albums.is_empty());
    }

    #[test]
    fn test_missing_child_fails_whole_page() {
        let broken = BLOCK.replace(r#"<span>12MB</span>"#, "");
        let fragment = format!("{BLOCK}{broken}");

        let parser = AlbumListParser::new().unwrap();
        let err = parser.parse_fragment(&fragment, &ParseContext::default()).unwrap_err();
        assert_eq!(err.rule(), Some("size_label"));
        assert!(matches!(err, ParsingError::RequiredElementMissing { .. }));
    }

    #[test]
    fn test_custom_block_selector() {
        let selectors = AlbumListSelectors {
            result_block: "li.catalog-result".to_string(),
            ..AlbumListSelectors::default()
        };
        let parser = AlbumListParser::with_config(&selectors).unwrap();
        let albums = parser.parse_fragment(BLOCK, &ParseContext::default()).unwrap();
        assert_eq!(albums.len(), 1);
    }
}
