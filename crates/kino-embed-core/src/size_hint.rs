//! Size hints embedded in media URLs
//!
//! Authors can pin the rendered size of a single link by appending
//! `d=WIDTHxHEIGHT` to its query string or fragment:
//!
//! ```rust
//! use kino_embed_core::size_hint::SizeHint;
//! use kino_embed_core::{Dimension, MediaUrl};
//!
//! let url = MediaUrl::parse("video.mp4?d=320x240").unwrap();
//! let (url, hint) = SizeHint::extract(&url);
//!
//! assert_eq!(url.as_str(), "video.mp4");
//! let hint = hint.unwrap();
//! assert_eq!(hint.width, Dimension::Pixels(320));
//! assert_eq!(hint.height, Dimension::Pixels(240));
//! ```

use crate::types::{Dimension, MediaUrl};
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn hint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?P<sep>[?&#])d=(?P<w>\d{1,4}%?)x(?P<h>\d{1,4}%?)(?P<end>&|#|$)")
            .expect("size hint pattern is valid")
    })
}

/// Width and height parsed from a `d=` hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    pub width: Dimension,
    pub height: Dimension,
}

impl SizeHint {
    /// Split a URL into its hint-free form and the hint it carried
    ///
    /// URLs without a well-formed hint come back unchanged with `None`.
    /// Other query parameters and fragments survive the rewrite.
    pub fn extract(url: &MediaUrl) -> (MediaUrl, Option<SizeHint>) {
        let raw = url.as_str();
        let Some(caps) = hint_pattern().captures(raw) else {
            return (url.clone(), None);
        };

        let (Ok(width), Ok(height)) = (
            caps["w"].parse::<Dimension>(),
            caps["h"].parse::<Dimension>(),
        ) else {
            return (url.clone(), None);
        };

        let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        let mut stripped = String::with_capacity(raw.len());
        stripped.push_str(&raw[..whole.start]);
        stripped.push_str(Self::joiner(&caps));
        stripped.push_str(&raw[whole.end..]);

        (
            MediaUrl::from_trusted(stripped),
            Some(SizeHint { width, height }),
        )
    }

    /// What replaces the hint so the remaining parameters stay well-formed
    fn joiner<'a>(caps: &Captures<'a>) -> &'a str {
        let sep = caps.name("sep").map_or("", |m| m.as_str());
        let end = caps.name("end").map_or("", |m| m.as_str());
        if end == "&" {
            sep
        } else {
            end
        }
    }
}
