//! Album records produced by the catalog extractor
//!
//! The listing page and the detail page describe the same album with
//! disjoint sets of fields, so each view has its own record type.
//! Serialized field names follow the public album schema
//! (`downloadURL`, `catalogDate`, `desc`, ...).

use serde::{Deserialize, Serialize};

/// Album author as displayed by the catalog, with reader credits removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Album entry from the search-results listing
///
/// Carries the listing-only fields (status, type, download link) and none of
/// the detail-page fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    /// First path segment of the album page URL
    pub id: String,
    pub title: String,
    /// Cover image URL
    pub cover: String,
    pub author: Author,
    /// Availability status, e.g. "Complete"
    pub status: String,
    /// Production type as displayed, e.g. "Solo" or "Group"
    #[serde(rename = "type")]
    pub project_type: String,
    pub language: String,
    /// Human readable archive size, e.g. "64MB"
    pub size: String,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
}

/// Full album record from the album detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub author: Author,
    pub language: String,
    pub genre: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Total running time in seconds
    pub duration: u64,
    pub size: String,
    #[serde(rename = "catalogDate")]
    pub catalog_date: String,
    /// Episodes in table order
    #[serde(rename = "episode")]
    pub episodes: Vec<Episode>,
}

impl AlbumDetail {
    /// Sum of the per-episode durations; may differ from `duration`, which is
    /// the total reported by the page itself.
    pub fn episodes_duration(&self) -> u64 {
        self.episodes.iter().map(|e| e.duration).sum()
    }
}

/// One audio track of an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Identifier as displayed in the episode table (not necessarily numeric)
    pub id: String,
    pub title: String,
    #[serde(rename = "audioURL")]
    pub audio_url: String,
    /// Running time in seconds
    pub duration: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_with_schema_field_names() {
        let summary = AlbumSummary {
            id: "moby-dick-by-herman-melville".to_string(),
            title: "Moby Dick".to_string(),
            cover: "https://archive.org/cover.jpg".to_string(),
            author: Author::new("Herman Melville"),
            status: "Complete".to_string(),
            project_type: "Solo".to_string(),
            language: "English".to_string(),
            size: "512MB".to_string(),
            download_url: "https://archive.org/moby.zip".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["type"], "Solo");
        assert_eq!(value["downloadURL"], "https://archive.org/moby.zip");
        assert_eq!(value["author"]["name"], "Herman Melville");
        assert!(value.get("project_type").is_none());
    }

    #[test]
    fn test_detail_serializes_with_schema_field_names() {
        let detail = AlbumDetail {
            id: "emma-by-jane-austen".to_string(),
            title: "Emma".to_string(),
            cover: String::new(),
            author: Author::new("Jane Austen"),
            language: "English".to_string(),
            genre: "Romance".to_string(),
            description: "A novel".to_string(),
            duration: 90,
            size: "1MB".to_string(),
            catalog_date: "2008-01-01".to_string(),
            episodes: vec![
                Episode {
                    id: "01".to_string(),
                    title: "Chapter 1".to_string(),
                    audio_url: "https://archive.org/01.mp3".to_string(),
                    duration: 60,
                },
                Episode {
                    id: "02".to_string(),
                    title: "Chapter 2".to_string(),
                    audio_url: "https://archive.org/02.mp3".to_string(),
                    duration: 45,
                },
            ],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["desc"], "A novel");
        assert_eq!(value["catalogDate"], "2008-01-01");
        assert_eq!(value["episode"][1]["audioURL"], "https://archive.org/02.mp3");
        assert_eq!(detail.episodes_duration(), 105);
    }
}
