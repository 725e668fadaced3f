//! Query vocabulary for the catalog search endpoint
//!
//! Each enum maps onto the lowercase token the site expects in its query
//! string. Parsing accepts either the site token or the upper-case schema
//! spelling (`CATALOG_DATE`), case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a query token does not name any known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct InvalidQueryToken {
    pub kind: &'static str,
    pub value: String,
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

/// Field the search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Title,
}

impl Category {
    pub const fn as_query_token(self) -> &'static str {
        match self {
            Self::Title => "title",
        }
    }
}

/// Recording production type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    #[default]
    Either,
    Solo,
    Group,
}

impl ProjectType {
    pub const fn as_query_token(self) -> &'static str {
        match self {
            Self::Either => "either",
            Self::Solo => "solo",
            Self::Group => "group",
        }
    }
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Alpha,
    #[default]
    CatalogDate,
}

impl SortOrder {
    pub const fn as_query_token(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::CatalogDate => "catalog_date",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidQueryToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "title" => Ok(Self::Title),
            _ => Err(InvalidQueryToken { kind: "category", value: s.to_string() }),
        }
    }
}

impl FromStr for ProjectType {
    type Err = InvalidQueryToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "either" => Ok(Self::Either),
            "solo" => Ok(Self::Solo),
            "group" => Ok(Self::Group),
            _ => Err(InvalidQueryToken { kind: "project type", value: s.to_string() }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidQueryToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "alpha" => Ok(Self::Alpha),
            "catalog_date" => Ok(Self::CatalogDate),
            _ => Err(InvalidQueryToken { kind: "sort order", value: s.to_string() }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_token())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_token())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_token())
    }
}

/// Parameters of one listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumListQuery {
    /// 1-based page number, passed through to the site unchanged
    pub page: u32,
    pub category: Category,
    pub project_type: ProjectType,
    pub order: SortOrder,
}

impl Default for AlbumListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: Category::default(),
            project_type: ProjectType::default(),
            order: SortOrder::default(),
        }
    }
}

impl AlbumListQuery {
    pub fn new(page: u32) -> Self {
        Self { page, ..Self::default() }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}
