//! Core types for Kino Embed

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;

/// A media source locator
///
/// Absolute URLs are validated with the `url` crate. Relative locators
/// (`video.mp4`, `/media/clip.webm?d=320x240`) are accepted as written,
/// since pages commonly link media relative to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaUrl(String);

impl MediaUrl {
    /// Parse a locator from its string form
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidUrl("empty locator".to_string()));
        }

        match Url::parse(trimmed) {
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(Error::InvalidUrl(format!("{}: {}", trimmed, e))),
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Build from a string already known to be a valid locator
    pub(crate) fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    /// The locator as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the query string or fragment
    pub fn path(&self) -> &str {
        let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Last path segment, e.g. `clip.webm`
    pub fn file_name(&self) -> &str {
        let path = self.path().trim_end_matches('/');
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Lower-cased file extension, if the last segment has one
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl FromStr for MediaUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MediaUrl {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MediaUrl> for String {
    fn from(url: MediaUrl) -> Self {
        url.0
    }
}

impl std::fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Width or height hint for embedded media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Let the player decide
    #[default]
    Unspecified,
    /// Absolute size in pixels
    Pixels(u32),
    /// Relative size in percent of the container
    Percent(u32),
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        if value == 0 {
            Dimension::Unspecified
        } else {
            Dimension::Pixels(value)
        }
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (digits, percent) = match s.strip_suffix('%') {
            Some(digits) => (digits, true),
            None => (s, false),
        };

        if digits.is_empty() && !percent {
            return Ok(Dimension::Unspecified);
        }

        let value: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidDimension(s.to_string()))?;

        Ok(match (value, percent) {
            (0, _) => Dimension::Unspecified,
            (v, true) => Dimension::Percent(v),
            (v, false) => Dimension::Pixels(v),
        })
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Unspecified => Ok(()),
            Dimension::Pixels(v) => write!(f, "{}", v),
            Dimension::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Options passed unchanged through every layer of an embed request
///
/// `fallback_to_blank` and `block` are interpreted by the embedder. All
/// other keys land in `extra` and are only meaningful to players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedOptions {
    /// Do not degrade to the link-only tier when nothing richer matched
    #[serde(default, alias = "FALLBACK_TO_BLANK")]
    pub fallback_to_blank: bool,
    /// Wrap non-empty output in a block container
    #[serde(default, alias = "BLOCK")]
    pub block: bool,
    /// Player-specific keys
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl EmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_to_blank(mut self, value: bool) -> Self {
        self.fallback_to_blank = value;
        self
    }

    pub fn with_block(mut self, value: bool) -> Self {
        self.block = value;
        self
    }

    /// Set a player-specific option
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Read a player-specific flag, treating absent or non-boolean as false
    pub fn flag(&self, key: &str) -> bool {
        self.extra
            .get(key)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}
