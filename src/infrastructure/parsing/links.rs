//! Album link resolution

use url::Url;

use super::{ParsingError, ParsingResult};

/// Resolve an href found in catalog markup against the site base URL
pub fn resolve_url(href: &str, base_url: &Url) -> ParsingResult<Url> {
    base_url.join(href.trim()).map_err(|e| ParsingError::UrlResolutionFailed {
        url: href.to_string(),
        reason: e.to_string(),
        base_url: Some(base_url.to_string()),
    })
}

/// Album identifier carried by an album page URL
///
/// The identifier is the first non-empty path segment:
/// `https://librivox.org/moby-dick-by-herman-melville/` yields
/// `moby-dick-by-herman-melville`.
pub fn album_id_from_href(href: &str, base_url: &Url) -> ParsingResult<String> {
    let url = resolve_url(href, base_url)?;

    url.path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ParsingError::UrlResolutionFailed {
            url: href.to_string(),
            reason: "no album path segment".to_string(),
            base_url: Some(base_url.to_string()),
        })
}
