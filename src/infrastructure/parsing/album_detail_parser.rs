//! Album detail parser for the album page
//!
//! Header fields (title, cover, author, genre, language, description) are
//! read inside the page container. The episode table and the product details
//! list are read document wide.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::config::AlbumDetailSelectors;
use super::context::DetailParseContext;
use super::duration::parse_duration;
use super::rules::{
    EPISODE_ROW, ExtractionRule, GENRE_LABELS, PRODUCT_DETAILS, element_attr, element_text,
};
use super::text::{label_value, strip_author_credits};
use super::{ContextualParser, ParsingResult};
use crate::domain::album::{AlbumDetail, Author, Episode};

/// Parser for extracting the full album record from an album page
#[derive(Debug, Clone)]
pub struct AlbumDetailParser {
    page_container: ExtractionRule,
    title: ExtractionRule,
    cover: ExtractionRule,
    author: ExtractionRule,
    genre_labels: ExtractionRule,
    description: ExtractionRule,
    episode_rows: ExtractionRule,
    episode_cells: ExtractionRule,
    episode_link: ExtractionRule,
    product_details: ExtractionRule,
}

impl AlbumDetailParser {
    /// Create a parser with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&AlbumDetailSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_config(selectors: &AlbumDetailSelectors) -> ParsingResult<Self> {
        Ok(Self {
            page_container: ExtractionRule::required("page_container", &selectors.page_container)?,
            title: ExtractionRule::required("title", &selectors.title)?,
            cover: ExtractionRule::required("cover", &selectors.cover)?,
            author: ExtractionRule::required("author", &selectors.author)?,
            genre_labels: ExtractionRule::compile(
                "genre_labels",
                &selectors.genre_labels,
                GENRE_LABELS.min_count(),
            )?,
            description: ExtractionRule::required("description", &selectors.description)?,
            episode_rows: ExtractionRule::optional("episode_rows", &selectors.episode_rows)?,
            episode_cells: ExtractionRule::compile(
                "episode_cells",
                &selectors.episode_cells,
                EPISODE_ROW.min_cells(),
            )?,
            episode_link: ExtractionRule::required("episode_link", &selectors.episode_link)?,
            product_details: ExtractionRule::compile(
                "product_details",
                &selectors.product_details,
                PRODUCT_DETAILS.min_count(),
            )?,
        })
    }

    /// Parse a complete album page document
    pub fn parse_document(&self, document: &str, context: &DetailParseContext) -> ParsingResult<AlbumDetail> {
        let html = Html::parse_document(document);
        self.parse_with_context(&html, context)
    }

    fn extract_episode(&self, row: ElementRef<'_>) -> ParsingResult<Episode> {
        let cells = self.episode_cells.select_all(row)?;
        let title_cell = cells[EPISODE_ROW.title];

        let link = self.episode_link.first(title_cell)?;
        let audio_url = element_attr(self.episode_link.name(), &link, "href")?;

        Ok(Episode {
            id: element_text(&cells[EPISODE_ROW.id]),
            title: element_text(&title_cell),
            audio_url,
            duration: parse_duration(&element_text(&cells[EPISODE_ROW.duration]))?,
        })
    }
}

impl ContextualParser for AlbumDetailParser {
    type Output = AlbumDetail;
    type Context = DetailParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        debug!("Parsing album detail for: {}", context.album_id);

        let root = html.root_element();
        let page = self.page_container.first(root)?;

        let title = self.title.text(page)?;
        let cover = self.cover.attr(page, "src")?;
        let author = strip_author_credits(&self.author.text(page)?);

        let labels = self.genre_labels.select_all(page)?;
        let genre = label_value(self.genre_labels.name(), &element_text(&labels[GENRE_LABELS.genre]))?;
        let language = label_value(self.genre_labels.name(), &element_text(&labels[GENRE_LABELS.language]))?;

        let description = self.description.text(page)?;

        let episodes = self
            .episode_rows
            .select_all(root)?
            .into_iter()
            .map(|row| self.extract_episode(row))
            .collect::<ParsingResult<Vec<_>>>()?;

        let details = self.product_details.select_all(root)?;
        let duration = parse_duration(&element_text(&details[PRODUCT_DETAILS.duration]))?;
        let size = element_text(&details[PRODUCT_DETAILS.size]);
        let catalog_date = element_text(&details[PRODUCT_DETAILS.catalog_date]);

        debug!(
            "Extracted album '{}' with {} episodes ({}s)",
            context.album_id,
            episodes.len(),
            duration
        );

        Ok(AlbumDetail {
            id: context.album_id.clone(),
            title,
            cover,
            author: Author::new(author),
            language,
            genre,
            description,
            duration,
            size,
            catalog_date,
            episodes,
        })
    }
}
