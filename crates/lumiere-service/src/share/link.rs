//! Share reference minting and location encoding.
//!
//! A reference lives in the location's query string as `album=<id>`. The
//! codec edits the raw query segment by segment so every other parameter
//! keeps its exact bytes and position.

use url::Url;
use url::form_urlencoded;

use lumiere_core::error::AppError;
use lumiere_core::result::AppResult;
use lumiere_core::types::AlbumId;
use lumiere_entity::share::{ALBUM_PARAM, ShareReference};

/// Mints share references and moves them in and out of locations.
#[derive(Debug, Clone, Default)]
pub struct LinkService;

impl LinkService {
    /// Creates a new link service.
    pub fn new() -> Self {
        Self
    }

    /// Mints the reference for an album. Pure: the album need not exist
    /// or be shared.
    pub fn mint_reference(&self, album_id: AlbumId) -> ShareReference {
        ShareReference::new(album_id)
    }

    /// Returns `location` with its `album` parameter set to the reference.
    ///
    /// The first existing `album` segment is replaced in place and any
    /// later duplicates are dropped; without one, the parameter is appended.
    pub fn encode_into_location(&self, reference: &ShareReference, location: &Url) -> Url {
        let param = format!("{ALBUM_PARAM}={}", reference.param_value());
        let mut segments = Vec::new();
        let mut placed = false;

        for segment in query_segments(location) {
            if is_album_segment(segment) {
                if !placed {
                    segments.push(param.as_str());
                    placed = true;
                }
            } else {
                segments.push(segment);
            }
        }
        if !placed {
            segments.push(param.as_str());
        }

        with_segments(location, &segments)
    }

    /// Extracts the reference carried by `location`.
    ///
    /// Returns `Ok(None)` when there is no `album` parameter and a
    /// `MalformedReference` error when its value is not a positive integer.
    pub fn decode_from_location(&self, location: &Url) -> AppResult<Option<ShareReference>> {
        let Some((_, raw)) = location.query_pairs().find(|(key, _)| key == ALBUM_PARAM) else {
            return Ok(None);
        };
        parse_album_id(&raw).map(|id| Some(ShareReference::new(id)))
    }

    /// Returns `location` without any `album` parameter.
    pub fn clear_from_location(&self, location: &Url) -> Url {
        let segments: Vec<&str> = query_segments(location)
            .filter(|segment| !is_album_segment(segment))
            .collect();
        with_segments(location, &segments)
    }
}

/// Parses a raw `album` value: ASCII digits only, non-zero, in range.
fn parse_album_id(raw: &str) -> AppResult<AlbumId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::malformed_reference(format!(
            "Share reference '{raw}' is not a positive integer"
        )));
    }
    raw.parse::<AlbumId>().map_err(|e| {
        AppError::malformed_reference(format!("Share reference '{raw}' is not a valid album id: {e}"))
    })
}

fn query_segments(location: &Url) -> impl Iterator<Item = &str> {
    location
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|segment| !segment.is_empty())
}

fn is_album_segment(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == ALBUM_PARAM)
}

fn with_segments(location: &Url, segments: &[&str]) -> Url {
    let mut next = location.clone();
    if segments.is_empty() {
        next.set_query(None);
    } else {
        next.set_query(Some(&segments.join("&")));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::error::ErrorKind;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn reference(id: u64) -> ShareReference {
        LinkService::new().mint_reference(AlbumId::new(id).unwrap())
    }

    #[test]
    fn test_encode_appends_after_existing_params() {
        let links = LinkService::new();
        let encoded = links.encode_into_location(&reference(7), &url("https://app/?utm=x"));
        assert_eq!(encoded.as_str(), "https://app/?utm=x&album=7");
    }

    #[test]
    fn test_encode_into_bare_location() {
        let links = LinkService::new();
        let encoded = links.encode_into_location(&reference(3), &url("https://app/gallery"));
        assert_eq!(encoded.as_str(), "https://app/gallery?album=3");
    }

    #[test]
    fn test_encode_replaces_in_place_and_drops_duplicates() {
        let links = LinkService::new();
        let location = url("https://app/?album=1&foo=bar&album=2");
        let encoded = links.encode_into_location(&reference(9), &location);
        assert_eq!(encoded.as_str(), "https://app/?album=9&foo=bar");
    }

    #[test]
    fn test_encode_is_idempotent() {
        let links = LinkService::new();
        let once = links.encode_into_location(&reference(4), &url("https://app/?a=1#top"));
        let twice = links.encode_into_location(&reference(4), &once);
        assert_eq!(once, twice);
        assert_eq!(once.fragment(), Some("top"));
    }

    #[test]
    fn test_encode_keeps_other_params_byte_for_byte() {
        let links = LinkService::new();
        let location = url("https://app/?q=a%20b+c&empty=&flag");
        let encoded = links.encode_into_location(&reference(2), &location);
        assert_eq!(encoded.query(), Some("q=a%20b+c&empty=&flag&album=2"));
    }

    #[test]
    fn test_decode_absent_is_none() {
        let links = LinkService::new();
        assert_eq!(links.decode_from_location(&url("https://app/?utm=x")).unwrap(), None);
        assert_eq!(links.decode_from_location(&url("https://app/")).unwrap(), None);
    }

    #[test]
    fn test_decode_roundtrip_any_location() {
        let links = LinkService::new();
        for base in ["https://app/", "https://app/?foo=bar", "https://app/?album=abc&x=1"] {
            for id in [1, 7, 42, u64::MAX] {
                let encoded = links.encode_into_location(&reference(id), &url(base));
                assert_eq!(links.decode_from_location(&encoded).unwrap(), Some(reference(id)));
            }
        }
    }

    #[test]
    fn test_decode_malformed_values() {
        let links = LinkService::new();
        for bad in ["abc", "", "0", "-3", "1.5", "+5", "18446744073709551616"] {
            let location = url(&format!("https://app/?album={bad}"));
            let err = links.decode_from_location(&location).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedReference, "value {bad:?}");
        }
    }

    #[test]
    fn test_decode_percent_encoded_key() {
        let links = LinkService::new();
        let decoded = links.decode_from_location(&url("https://app/?alb%75m=12")).unwrap();
        assert_eq!(decoded, Some(reference(12)));
    }

    #[test]
    fn test_clear_restores_original_params() {
        let links = LinkService::new();
        for original in ["https://app/?utm=x&lang=fr", "https://app/", "https://app/p?z=1#frag"] {
            let location = url(original);
            let encoded = links.encode_into_location(&reference(5), &location);
            assert_eq!(links.clear_from_location(&encoded), location);
        }
    }

    #[test]
    fn test_clear_without_reference_is_noop() {
        let links = LinkService::new();
        let location = url("https://app/?foo=bar");
        assert_eq!(links.clear_from_location(&location), location);
    }
}
