//! Embedder - selects players for a set of alternatives and composes output
//!
//! Coordinates:
//! - Size hint extraction for single URLs
//! - Player selection in rank order
//! - Fallback composition and the optional block container
//! - Capability queries and the marker pattern

use crate::{
    config::{EmbedConfig, DEFAULT_BLOCK_CLASS},
    fragment::Composition,
    html::Tag,
    markers::MarkerPattern,
    player::{Player, LINK_RANK},
    registry::PlayerRegistry,
    size_hint::SizeHint,
    types::{Dimension, EmbedOptions, MediaUrl},
    Result,
};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Entry point for embedding media
///
/// Cheap to share: wrap it in an `Arc` and call it from any thread. The
/// ranked player list and marker pattern are built once, on first use.
#[derive(Debug)]
pub struct Embedder {
    registry: PlayerRegistry,
    block_class: String,
}

impl Default for Embedder {
    fn default() -> Self {
        Self::new(PlayerRegistry::with_defaults())
    }
}

impl Embedder {
    /// Create an embedder over a registry
    pub fn new(registry: PlayerRegistry) -> Self {
        Self {
            registry,
            block_class: DEFAULT_BLOCK_CLASS.to_string(),
        }
    }

    /// Create an embedder from configuration
    pub fn from_config(config: &EmbedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.build_registry()?).with_block_class(config.block_class.clone()))
    }

    /// Set the CSS class of the block container
    pub fn with_block_class(mut self, class: impl Into<String>) -> Self {
        self.block_class = class.into();
        self
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Enabled players, highest rank first
    pub fn players(&self) -> &[Arc<dyn Player>] {
        self.registry.ranked()
    }

    /// Embed a single URL
    ///
    /// A `d=WIDTHxHEIGHT` hint in the URL overrides `width` and `height` and
    /// is removed before players see the URL.
    pub fn embed_url(
        &self,
        url: &MediaUrl,
        name: &str,
        width: Dimension,
        height: Dimension,
        options: &EmbedOptions,
    ) -> Result<String> {
        let (url, hint) = SizeHint::extract(url);
        let (width, height) = match hint {
            Some(hint) => {
                debug!(width = %hint.width, height = %hint.height, "Using size hint from URL");
                (hint.width, hint.height)
            }
            None => (width, height),
        };

        self.embed_alternatives(std::slice::from_ref(&url), name, width, height, options)
    }

    /// Embed interchangeable encodings of the same media
    ///
    /// Every matching player nests inside the one ranked above it, down to
    /// the first player whose markup leaves no fallback slot.
    #[instrument(level = "debug", skip(self, alternatives, options), fields(count = alternatives.len()))]
    pub fn embed_alternatives(
        &self,
        alternatives: &[MediaUrl],
        name: &str,
        width: Dimension,
        height: Dimension,
        options: &EmbedOptions,
    ) -> Result<String> {
        if alternatives.is_empty() {
            return Ok(String::new());
        }

        let mut composition = Composition::new();

        for player in self.registry.ranked() {
            if options.fallback_to_blank && player.rank() == LINK_RANK && composition.is_blank() {
                debug!(player = player.id(), "Nothing richer matched, not degrading to a link");
                continue;
            }

            let supported = player.list_supported_urls(alternatives, options);
            if supported.is_empty() {
                trace!(player = player.id(), "No supported alternatives");
                continue;
            }

            let fragment = player.embed(&supported, name, width, height, options)?;
            debug!(
                player = player.id(),
                rank = player.rank(),
                urls = supported.len(),
                nests = fragment.has_slot(),
                "Player matched"
            );
            composition.insert(fragment);

            if !composition.is_open() {
                break;
            }
        }

        let markup = composition.render();
        if options.block && !markup.is_empty() {
            return Ok(Tag::new("div")
                .attr("class", self.block_class.as_str())
                .wrap(&markup));
        }

        Ok(markup)
    }

    /// Returns true if any player richer than a plain link supports `url`
    pub fn can_embed_url(&self, url: &MediaUrl, options: &EmbedOptions) -> bool {
        let (url, _) = SizeHint::extract(url);
        self.can_embed_urls(std::slice::from_ref(&url), options)
    }

    /// Returns true if any player richer than a plain link supports one of
    /// `urls`. Never renders markup.
    pub fn can_embed_urls(&self, urls: &[MediaUrl], options: &EmbedOptions) -> bool {
        for player in self.registry.ranked() {
            if player.rank() <= LINK_RANK {
                return false;
            }
            if !player.list_supported_urls(urls, options).is_empty() {
                debug!(player = player.id(), "Can embed");
                return true;
            }
        }
        false
    }

    /// Combined pattern of every enabled player's markers
    pub fn embeddable_markers(&self) -> Option<&MarkerPattern> {
        self.registry.markers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{Fragment, FALLBACK_SLOT};

    /// Claims URLs containing `needle` and renders a template around them
    struct Stub {
        id: &'static str,
        rank: i32,
        needle: &'static str,
        template: String,
    }

    impl Player for Stub {
        fn id(&self) -> &str {
            self.id
        }

        fn rank(&self) -> i32 {
            self.rank
        }

        fn embeddable_markers(&self) -> Vec<String> {
            vec![self.needle.to_string()]
        }

        fn list_supported_urls(&self, alternatives: &[MediaUrl], _options: &EmbedOptions) -> Vec<MediaUrl> {
            alternatives
                .iter()
                .filter(|u| u.as_str().contains(self.needle))
                .cloned()
                .collect()
        }

        fn embed(
            &self,
            _urls: &[MediaUrl],
            _name: &str,
            width: Dimension,
            height: Dimension,
            _options: &EmbedOptions,
        ) -> Result<Fragment> {
            let markup = self
                .template
                .replace("{w}", &width.to_string())
                .replace("{h}", &height.to_string());
            Fragment::from_template(self.id, &markup)
        }
    }

    fn stub(id: &'static str, rank: i32, needle: &'static str, template: &str) -> Arc<dyn Player> {
        Arc::new(Stub {
            id,
            rank,
            needle,
            template: template.replace("SLOT", FALLBACK_SLOT),
        })
    }

    fn url(raw: &str) -> MediaUrl {
        MediaUrl::parse(raw).unwrap()
    }

    #[test]
    fn test_stops_after_closed_fragment() {
        let embedder = Embedder::new(PlayerRegistry::new(vec![
            stub("a", 3, "x", "<a>"),
            stub("b", 2, "x", "<b>"),
        ]));
        let out = embedder
            .embed_alternatives(&[url("x")], "", Dimension::Unspecified, Dimension::Unspecified, &EmbedOptions::default())
            .unwrap();
        assert_eq!(out, "<a>");
    }

    #[test]
    fn test_skips_non_matching_players() {
        let embedder = Embedder::new(PlayerRegistry::new(vec![
            stub("a", 3, "nope", "<a>SLOT</a>"),
            stub("b", 2, "x", "<b>SLOT</b>"),
            stub("c", 0, "", "link"),
        ]));
        let out = embedder
            .embed_alternatives(&[url("x")], "", Dimension::Unspecified, Dimension::Unspecified, &EmbedOptions::default())
            .unwrap();
        assert_eq!(out, "<b>link</b>");
    }

    #[test]
    fn test_player_error_propagates() {
        let embedder = Embedder::new(PlayerRegistry::new(vec![stub("bad", 1, "", "SLOTSLOT")]));
        let err = embedder
            .embed_alternatives(&[url("x")], "", Dimension::Unspecified, Dimension::Unspecified, &EmbedOptions::default())
            .unwrap_err();
        assert_eq!(err.error_code(), "PLAYER");
    }

    #[test]
    fn test_size_hint_reaches_player() {
        let embedder = Embedder::new(PlayerRegistry::new(vec![stub("a", 1, "", "{w}x{h}")]));
        let out = embedder
            .embed_url(
                &url("clip.mp4#d=50%x200"),
                "",
                Dimension::Pixels(1),
                Dimension::Pixels(2),
                &EmbedOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "50%x200");
    }

    #[test]
    fn test_block_class_from_config() {
        let config = EmbedConfig {
            block_class: "wide".to_string(),
            ..EmbedConfig::default()
        };
        let embedder = Embedder::from_config(&config).unwrap();
        let out = embedder
            .embed_url(
                &url("a.pdf"),
                "Doc",
                Dimension::Unspecified,
                Dimension::Unspecified,
                &EmbedOptions::default().with_block(true),
            )
            .unwrap();
        assert_eq!(out, r#"<div class="wide"><a href="a.pdf" class="media-link">Doc</a></div>"#);
    }
}
