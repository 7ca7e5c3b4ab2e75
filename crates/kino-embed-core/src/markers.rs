//! Combined marker pattern for pre-filtering links
//!
//! Scanning a large document and running the full selection for every link
//! is wasteful. Callers first test each link against one alternation of all
//! players' literal markers and only embed the links that hit.

use regex::{Regex, RegexBuilder};

/// Escaped alternation of every enabled player's markers
///
/// Matching ignores case, the same way players compare file extensions.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
    markers: Vec<String>,
}

impl MarkerPattern {
    /// Build from literal markers; `None` when there are none
    ///
    /// Duplicates and empty strings are dropped, first occurrence wins.
    pub fn build<I, S>(markers: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for marker in markers {
            let marker = marker.into();
            if !marker.is_empty() && !unique.contains(&marker) {
                unique.push(marker);
            }
        }

        if unique.is_empty() {
            return None;
        }

        let source = unique
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        // Escaped literals joined by `|` always form a valid pattern.
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Self {
            regex,
            markers: unique,
        })
    }

    /// Pattern source, usable with any regex engine that shares the syntax
    ///
    /// The source carries no case flag; compile it case-insensitively to get
    /// the same matches as [`MarkerPattern::is_match`].
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The deduplicated literal markers, in pattern order
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns true if `text` contains any marker, ignoring case
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl std::fmt::Display for MarkerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
