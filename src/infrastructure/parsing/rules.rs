//! Named extraction rules and positional field layouts
//!
//! A rule pairs a compiled selector with the minimum number of elements it
//! must match. Positional layouts name the index of every field in a
//! fixed-order sequence (metadata segments, table cells, detail values) and
//! derive the rule arity from the highest index, so a markup change only
//! touches one layout.

use scraper::{ElementRef, Selector};

use super::{ParsingError, ParsingResult};

/// Compiled selector with a declared minimum match count
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    name: &'static str,
    selector_text: String,
    selector: Selector,
    min_count: usize,
}

impl ExtractionRule {
    /// Compile a rule that must match at least `min_count` elements
    pub fn compile(name: &'static str, selector_text: &str, min_count: usize) -> ParsingResult<Self> {
        let selector = Selector::parse(selector_text).map_err(|e| ParsingError::InvalidSelector {
            rule: name.to_string(),
            selector: selector_text.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name,
            selector_text: selector_text.to_string(),
            selector,
            min_count,
        })
    }

    /// Compile a rule that must match at least one element
    pub fn required(name: &'static str, selector_text: &str) -> ParsingResult<Self> {
        Self::compile(name, selector_text, 1)
    }

    /// Compile a rule that may match nothing
    pub fn optional(name: &'static str, selector_text: &str) -> ParsingResult<Self> {
        Self::compile(name, selector_text, 0)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn selector_text(&self) -> &str {
        &self.selector_text
    }

    pub const fn min_count(&self) -> usize {
        self.min_count
    }

    /// All matches below `scope` in document order, checked against the arity
    pub fn select_all<'a>(&self, scope: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        let elements: Vec<ElementRef<'a>> = scope.select(&self.selector).collect();

        if elements.len() < self.min_count {
            return Err(self.arity_error(elements.len()));
        }

        Ok(elements)
    }

    /// First match below `scope`
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> ParsingResult<ElementRef<'a>> {
        scope
            .select(&self.selector)
            .next()
            .ok_or_else(|| ParsingError::required_element_missing(self.name, &self.selector_text))
    }

    /// Trimmed text content of the first match
    pub fn text(&self, scope: ElementRef<'_>) -> ParsingResult<String> {
        self.first(scope).map(|element| element_text(&element))
    }

    /// Trimmed attribute value of the first match
    pub fn attr(&self, scope: ElementRef<'_>, attribute: &str) -> ParsingResult<String> {
        let element = self.first(scope)?;
        element_attr(self.name, &element, attribute)
    }

    fn arity_error(&self, found: usize) -> ParsingError {
        if found == 0 {
            ParsingError::required_element_missing(self.name, &self.selector_text)
        } else {
            ParsingError::insufficient_elements(self.name, &self.selector_text, self.min_count, found)
        }
    }
}

/// Concatenated, trimmed text of an element and its descendants
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed attribute value; a missing attribute fails the named rule
pub fn element_attr(rule: &str, element: &ElementRef<'_>, attribute: &str) -> ParsingResult<String> {
    element
        .value()
        .attr(attribute)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| ParsingError::attribute_missing(rule, attribute))
}

/// Segment positions of the "status | type | language" line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaLineLayout {
    pub status: usize,
    pub project_type: usize,
    pub language: usize,
}

pub const META_LINE: MetaLineLayout = MetaLineLayout {
    status: 0,
    project_type: 1,
    language: 2,
};

/// Positions of the genre and language labels on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreLabelLayout {
    pub genre: usize,
    pub language: usize,
}

impl GenreLabelLayout {
    pub const fn min_count(&self) -> usize {
        max_index(&[self.genre, self.language]) + 1
    }
}

pub const GENRE_LABELS: GenreLabelLayout = GenreLabelLayout {
    genre: 0,
    language: 1,
};

/// Cell positions of one episode table row
///
/// The `reserved` cell carries nothing the record uses, but it still counts
/// towards the minimum row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRowLayout {
    pub id: usize,
    pub title: usize,
    pub reserved: usize,
    pub duration: usize,
}

impl EpisodeRowLayout {
    pub const fn min_cells(&self) -> usize {
        max_index(&[self.id, self.title, self.reserved, self.duration]) + 1
    }
}

pub const EPISODE_ROW: EpisodeRowLayout = EpisodeRowLayout {
    id: 0,
    title: 1,
    reserved: 2,
    duration: 3,
};

/// Value positions of the product details list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDetailsLayout {
    pub duration: usize,
    pub size: usize,
    pub catalog_date: usize,
}

impl ProductDetailsLayout {
    pub const fn min_count(&self) -> usize {
        max_index(&[self.duration, self.size, self.catalog_date]) + 1
    }
}

pub const PRODUCT_DETAILS: ProductDetailsLayout = ProductDetailsLayout {
    duration: 0,
    size: 1,
    catalog_date: 2,
};

const fn max_index(indices: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < indices.len() {
        if indices[i] > max {
            max = indices[i];
        }
        i += 1;
    }
    max
}
