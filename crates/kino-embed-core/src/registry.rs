//! Ranked player registry

use crate::markers::MarkerPattern;
use crate::player::Player;
use crate::players::default_players;
use std::cmp::Reverse;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Owns the registered players and the caches derived from them
///
/// The ranked list and the marker pattern are each built on first use and
/// never rebuilt while the registry is shared. Registering a player needs
/// `&mut self` and clears both caches.
#[derive(Default)]
pub struct PlayerRegistry {
    players: Vec<Arc<dyn Player>>,
    ranked: OnceLock<Vec<Arc<dyn Player>>>,
    markers: OnceLock<Option<MarkerPattern>>,
}

impl PlayerRegistry {
    /// Create a registry over an explicit player set, in registration order
    pub fn new(players: Vec<Arc<dyn Player>>) -> Self {
        Self {
            players,
            ranked: OnceLock::new(),
            markers: OnceLock::new(),
        }
    }

    /// Create a registry with the default video, audio and link players
    pub fn with_defaults() -> Self {
        Self::new(default_players())
    }

    /// Register a player after any already registered
    pub fn register(&mut self, player: Arc<dyn Player>) {
        self.players.push(player);
        self.ranked = OnceLock::new();
        self.markers = OnceLock::new();
    }

    /// Every registered player, enabled or not, in registration order
    pub fn registered(&self) -> &[Arc<dyn Player>] {
        &self.players
    }

    /// Enabled players, highest rank first
    ///
    /// Players of equal rank keep their registration order.
    pub fn ranked(&self) -> &[Arc<dyn Player>] {
        self.ranked.get_or_init(|| {
            let mut ranked: Vec<_> = self
                .players
                .iter()
                .filter(|p| {
                    let enabled = p.is_enabled();
                    if !enabled {
                        debug!(player = p.id(), rank = p.rank(), "Skipping disabled player");
                    }
                    enabled
                })
                .cloned()
                .collect();
            ranked.sort_by_key(|p| Reverse(p.rank()));

            info!(
                registered = self.players.len(),
                enabled = ranked.len(),
                "Player registry built"
            );
            ranked
        })
    }

    /// Combined pattern of every enabled player's markers
    pub fn markers(&self) -> Option<&MarkerPattern> {
        self.markers
            .get_or_init(|| {
                let pattern =
                    MarkerPattern::build(self.ranked().iter().flat_map(|p| p.embeddable_markers()));
                if let Some(ref pattern) = pattern {
                    debug!(pattern = pattern.as_str(), "Marker pattern built");
                }
                pattern
            })
            .as_ref()
    }

    /// Find an enabled player by id
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Player>> {
        self.ranked().iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.ranked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked().is_empty()
    }
}

impl std::fmt::Debug for PlayerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerRegistry")
            .field("players", &self.players)
            .field("built", &self.ranked.get().is_some())
            .finish()
    }
}
