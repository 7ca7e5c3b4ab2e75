//! Native `<video>` and `<audio>` element players

use crate::fragment::Fragment;
use crate::html::Tag;
use crate::player::Player;
use crate::types::{Dimension, EmbedOptions, MediaUrl};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which native element a [`MediaTagPlayer`] writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaElement {
    Video,
    Audio,
}

impl MediaElement {
    pub fn tag_name(&self) -> &'static str {
        match self {
            MediaElement::Video => "video",
            MediaElement::Audio => "audio",
        }
    }

    pub fn default_rank(&self) -> i32 {
        match self {
            MediaElement::Video => 30,
            MediaElement::Audio => 20,
        }
    }

    pub fn default_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaElement::Video => &["mp4", "m4v", "webm", "ogv", "mov"],
            MediaElement::Audio => &["mp3", "m4a", "aac", "oga", "ogg", "opus", "wav", "flac"],
        }
    }

    /// MIME type for the `type` attribute of a `<source>`
    pub fn mime_type(&self, extension: &str) -> Option<&'static str> {
        let mime = match (self, extension) {
            (MediaElement::Video, "mp4" | "m4v") => "video/mp4",
            (MediaElement::Video, "webm") => "video/webm",
            (MediaElement::Video, "ogv") => "video/ogg",
            (MediaElement::Video, "mov") => "video/quicktime",
            (MediaElement::Audio, "mp3") => "audio/mpeg",
            (MediaElement::Audio, "m4a") => "audio/mp4",
            (MediaElement::Audio, "aac") => "audio/aac",
            (MediaElement::Audio, "oga" | "ogg" | "opus") => "audio/ogg",
            (MediaElement::Audio, "wav") => "audio/wav",
            (MediaElement::Audio, "flac") => "audio/flac",
            _ => return None,
        };
        Some(mime)
    }
}

impl std::fmt::Display for MediaElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Embeds alternatives as `<source>` children of a native media element
///
/// The element body is left as a fallback slot so browsers without support
/// for the element (or any of its sources) show the next weaker player.
///
/// Recognized options: `autoplay`, `loop`, `muted` and `controls` flags
/// (controls default to on), and a `poster` image for video.
#[derive(Debug, Clone)]
pub struct MediaTagPlayer {
    element: MediaElement,
    rank: i32,
    enabled: bool,
    extensions: Vec<String>,
}

impl MediaTagPlayer {
    pub fn new(element: MediaElement) -> Self {
        Self {
            element,
            rank: element.default_rank(),
            enabled: true,
            extensions: element
                .default_extensions()
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    pub fn video() -> Self {
        Self::new(MediaElement::Video)
    }

    pub fn audio() -> Self {
        Self::new(MediaElement::Audio)
    }

    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replace the claimed extensions (case-insensitive, without the dot)
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    fn supports(&self, url: &MediaUrl) -> bool {
        url.extension()
            .map_or(false, |ext| self.extensions.iter().any(|e| *e == ext))
    }
}

impl Player for MediaTagPlayer {
    fn id(&self) -> &str {
        self.element.tag_name()
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn is_enabled(&self) -> bool {
        self.enabled && self.rank >= 0
    }

    fn embeddable_markers(&self) -> Vec<String> {
        self.extensions.iter().map(|e| format!(".{}", e)).collect()
    }

    fn list_supported_urls(&self, alternatives: &[MediaUrl], _options: &EmbedOptions) -> Vec<MediaUrl> {
        alternatives
            .iter()
            .filter(|url| self.supports(url))
            .cloned()
            .collect()
    }

    fn embed(
        &self,
        urls: &[MediaUrl],
        name: &str,
        width: Dimension,
        height: Dimension,
        options: &EmbedOptions,
    ) -> Result<Fragment> {
        let controls = options
            .get("controls")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);

        let mut element = Tag::new(self.element.tag_name())
            .attr_if_set("title", name)
            .flag("controls", controls)
            .flag("autoplay", options.flag("autoplay"))
            .flag("loop", options.flag("loop"))
            .flag("muted", options.flag("muted"));

        if self.element == MediaElement::Video {
            element = element
                .attr_if_set("width", width.to_string())
                .attr_if_set("height", height.to_string());
            if let Some(poster) = options.get("poster").and_then(serde_json::Value::as_str) {
                element = element.attr("poster", poster);
            }
        }

        let mut open = element.open();
        for url in urls {
            let mut source = Tag::new("source").attr("src", url.as_str());
            if let Some(mime) = url.extension().and_then(|ext| self.element.mime_type(&ext)) {
                source = source.attr("type", mime);
            }
            open.push_str(&source.void());
        }

        Ok(Fragment::wrapper(open, element.close()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(raw: &[&str]) -> Vec<MediaUrl> {
        raw.iter().map(|u| MediaUrl::parse(u).unwrap()).collect()
    }

    #[test]
    fn test_video_claims_video_extensions_only() {
        let player = MediaTagPlayer::video();
        let supported = player.list_supported_urls(
            &urls(&["a.MP4", "b.mp3", "c.webm?t=1", "d.txt"]),
            &EmbedOptions::default(),
        );
        assert_eq!(supported, urls(&["a.MP4", "c.webm?t=1"]));
    }

    #[test]
    fn test_video_markup() {
        let player = MediaTagPlayer::video();
        let fragment = player
            .embed(
                &urls(&["clip.webm", "clip.mp4"]),
                "Clip",
                Dimension::Pixels(320),
                Dimension::Percent(50),
                &EmbedOptions::default().with_extra("autoplay", true),
            )
            .unwrap();

        assert_eq!(
            fragment,
            Fragment::wrapper(
                concat!(
                    r#"<video title="Clip" controls autoplay width="320" height="50%">"#,
                    r#"<source src="clip.webm" type="video/webm">"#,
                    r#"<source src="clip.mp4" type="video/mp4">"#
                ),
                "</video>"
            )
        );
    }

    #[test]
    fn test_audio_ignores_dimensions() {
        let player = MediaTagPlayer::audio();
        let fragment = player
            .embed(
                &urls(&["song.mp3"]),
                "",
                Dimension::Pixels(320),
                Dimension::Pixels(240),
                &EmbedOptions::default().with_extra("controls", false),
            )
            .unwrap();
        assert_eq!(
            fragment,
            Fragment::wrapper(r#"<audio><source src="song.mp3" type="audio/mpeg">"#, "</audio>")
        );
    }

    #[test]
    fn test_custom_extensions_and_markers() {
        let player = MediaTagPlayer::audio().with_extensions([".MKA", "weba"]);
        assert_eq!(player.embeddable_markers(), vec![".mka", ".weba"]);
        assert!(player.supports(&MediaUrl::parse("x.mka").unwrap()));
        assert!(!player.supports(&MediaUrl::parse("x.mp3").unwrap()));
    }

    #[test]
    fn test_disabled_by_flag_or_rank() {
        assert!(MediaTagPlayer::video().is_enabled());
        assert!(!MediaTagPlayer::video().with_enabled(false).is_enabled());
        assert!(!MediaTagPlayer::video().with_rank(-1).is_enabled());
    }
}
