//! Default players and the factory table used by configuration

mod link;
mod media_tag;

pub use link::LinkPlayer;
pub use media_tag::{MediaElement, MediaTagPlayer};

use crate::config::PlayerEntry;
use crate::player::Player;
use crate::{Error, Result};
use std::sync::Arc;

/// Builds a player from its configuration entry
pub type PlayerFactory = fn(&PlayerEntry) -> Arc<dyn Player>;

/// Known player kinds, in default registration order
pub const FACTORIES: &[(&str, PlayerFactory)] = &[
    ("video", video_player),
    ("audio", audio_player),
    ("link", link_player),
];

/// Look up the factory for a player kind
pub fn factory(kind: &str) -> Option<PlayerFactory> {
    FACTORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(kind))
        .map(|(_, factory)| *factory)
}

/// Build a player from its configuration entry
pub fn create_player(entry: &PlayerEntry) -> Result<Arc<dyn Player>> {
    let factory = factory(&entry.kind).ok_or_else(|| Error::UnknownPlayer(entry.kind.clone()))?;
    Ok(factory(entry))
}

/// The default player set: video, audio, then a download link
pub fn default_players() -> Vec<Arc<dyn Player>> {
    vec![
        Arc::new(MediaTagPlayer::video()),
        Arc::new(MediaTagPlayer::audio()),
        Arc::new(LinkPlayer::new()),
    ]
}

fn video_player(entry: &PlayerEntry) -> Arc<dyn Player> {
    Arc::new(media_tag_player(MediaElement::Video, entry))
}

fn audio_player(entry: &PlayerEntry) -> Arc<dyn Player> {
    Arc::new(media_tag_player(MediaElement::Audio, entry))
}

fn media_tag_player(element: MediaElement, entry: &PlayerEntry) -> MediaTagPlayer {
    let mut player = MediaTagPlayer::new(element).with_enabled(entry.enabled);
    if let Some(rank) = entry.rank {
        player = player.with_rank(rank);
    }
    if let Some(ref extensions) = entry.extensions {
        player = player.with_extensions(extensions);
    }
    player
}

fn link_player(entry: &PlayerEntry) -> Arc<dyn Player> {
    let mut player = LinkPlayer::new().with_enabled(entry.enabled);
    if let Some(rank) = entry.rank {
        player = player.with_rank(rank);
    }
    Arc::new(player)
}
