//! Plain download link, the last resort of every fallback chain

use crate::fragment::Fragment;
use crate::html::{escape, Tag};
use crate::player::{Player, LINK_RANK};
use crate::types::{Dimension, EmbedOptions, MediaUrl};
use crate::Result;

/// Links to the first alternative
///
/// Claims every URL and renders finished markup, so nothing can be nested
/// below it. The link text is the media name, or the file name when the
/// name is empty.
#[derive(Debug, Clone)]
pub struct LinkPlayer {
    rank: i32,
    enabled: bool,
    class: String,
}

impl LinkPlayer {
    pub fn new() -> Self {
        Self {
            rank: LINK_RANK,
            enabled: true,
            class: "media-link".to_string(),
        }
    }

    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Default for LinkPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for LinkPlayer {
    fn id(&self) -> &str {
        "link"
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn is_enabled(&self) -> bool {
        self.enabled && self.rank >= 0
    }

    fn embeddable_markers(&self) -> Vec<String> {
        Vec::new()
    }

    fn list_supported_urls(&self, alternatives: &[MediaUrl], _options: &EmbedOptions) -> Vec<MediaUrl> {
        alternatives.to_vec()
    }

    fn embed(
        &self,
        urls: &[MediaUrl],
        name: &str,
        _width: Dimension,
        _height: Dimension,
        _options: &EmbedOptions,
    ) -> Result<Fragment> {
        let Some(url) = urls.first() else {
            return Ok(Fragment::leaf(""));
        };

        let text = if name.is_empty() { url.file_name() } else { name };
        let anchor = Tag::new("a")
            .attr("href", url.as_str())
            .attr_if_set("class", self.class.as_str());

        Ok(Fragment::leaf(anchor.wrap(&escape(text))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_uses_name_or_file_name() {
        let player = LinkPlayer::new();
        let urls = vec![MediaUrl::parse("https://example.com/media/a&b.mp4").unwrap()];
        let options = EmbedOptions::default();

        let named = player
            .embed(&urls, "My <clip>", Dimension::Unspecified, Dimension::Unspecified, &options)
            .unwrap();
        assert_eq!(
            named,
            Fragment::leaf(r#"<a href="https://example.com/media/a&amp;b.mp4" class="media-link">My &lt;clip&gt;</a>"#)
        );

        let unnamed = player
            .embed(&urls, "", Dimension::Unspecified, Dimension::Unspecified, &options)
            .unwrap();
        assert_eq!(
            unnamed,
            Fragment::leaf(r#"<a href="https://example.com/media/a&amp;b.mp4" class="media-link">a&amp;b.mp4</a>"#)
        );
    }

    #[test]
    fn test_link_claims_everything() {
        let player = LinkPlayer::new();
        let urls = vec![
            MediaUrl::parse("a.xyz").unwrap(),
            MediaUrl::parse("b").unwrap(),
        ];
        assert_eq!(player.list_supported_urls(&urls, &EmbedOptions::default()), urls);
        assert_eq!(player.rank(), LINK_RANK);
        assert!(player.embeddable_markers().is_empty());
    }
}
