//! Text normalization for catalog fields

use super::rules::{META_LINE, MetaLineLayout};
use super::{ParsingError, ParsingResult};

/// Author name with trailing reader credits removed
///
/// Everything from the first `(` on is dropped:
/// `"Jane Doe (read by John Smith)"` becomes `"Jane Doe"`.
pub fn strip_author_credits(raw: &str) -> String {
    raw.split_once('(')
        .map_or(raw, |(name, _)| name)
        .trim()
        .to_string()
}

/// The three logical fields of a listing metadata line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaFields {
    pub status: String,
    pub project_type: String,
    pub language: String,
}

/// Split a "status | type | language" line
///
/// Missing trailing segments become empty strings, segments past the third
/// are ignored.
pub fn split_meta_line(raw: &str) -> MetaFields {
    split_meta_line_with(raw, META_LINE)
}

pub fn split_meta_line_with(raw: &str, layout: MetaLineLayout) -> MetaFields {
    let segments: Vec<&str> = raw.trim().split('|').map(str::trim).collect();
    let segment = |index: usize| segments.get(index).copied().unwrap_or_default().to_string();

    MetaFields {
        status: segment(layout.status),
        project_type: segment(layout.project_type),
        language: segment(layout.language),
    }
}

/// Value part of a "Label: value" element text
pub fn label_value(rule: &str, raw: &str) -> ParsingResult<String> {
    raw.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .ok_or_else(|| ParsingError::LabelValueMissing {
            rule: rule.to_string(),
            text: raw.trim().to_string(),
        })
}
