//! The player strategy trait

use crate::fragment::Fragment;
use crate::types::{Dimension, EmbedOptions, MediaUrl};
use crate::Result;

/// Rank of the link-only tier
///
/// Players at or below this rank are plain fallbacks: they never count as
/// "able to embed" and can be suppressed with `fallback_to_blank`.
pub const LINK_RANK: i32 = 0;

/// One technique for embedding media
///
/// Players are immutable and stateless across requests. For fixed inputs
/// both [`list_supported_urls`](Player::list_supported_urls) and
/// [`embed`](Player::embed) must return the same result.
pub trait Player: Send + Sync {
    /// Stable identifier, e.g. `"video"`
    fn id(&self) -> &str;

    /// Priority; higher ranks are tried first and wrap lower ones
    fn rank(&self) -> i32;

    /// Disabled players never reach the ranked list
    fn is_enabled(&self) -> bool {
        self.rank() >= LINK_RANK
    }

    /// Literal substrings that cheaply pre-filter candidate links
    fn embeddable_markers(&self) -> Vec<String>;

    /// The subset of `alternatives` this player can embed, in input order
    fn list_supported_urls(&self, alternatives: &[MediaUrl], options: &EmbedOptions) -> Vec<MediaUrl>;

    /// Render markup for `urls`, previously returned by `list_supported_urls`
    fn embed(
        &self,
        urls: &[MediaUrl],
        name: &str,
        width: Dimension,
        height: Dimension,
        options: &EmbedOptions,
    ) -> Result<Fragment>;
}

impl std::fmt::Debug for dyn Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id())
            .field("rank", &self.rank())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
