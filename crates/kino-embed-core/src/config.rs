//! Embedder configuration
//!
//! Which players exist, how they rank, and what they claim is configuration,
//! not code. A JSON document like
//!
//! ```json
//! {
//!   "block_class": "media-embed",
//!   "players": [
//!     { "kind": "video", "rank": 40 },
//!     { "kind": "audio", "extensions": ["mp3", "ogg"] },
//!     { "kind": "link", "enabled": false }
//!   ]
//! }
//! ```
//!
//! builds a registry with the given overrides, in the listed order.

use crate::error::{Error, Result};
use crate::players::{create_player, FACTORIES};
use crate::registry::PlayerRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Class of the `<div>` wrapping block-level output
pub const DEFAULT_BLOCK_CLASS: &str = "media-embed";

fn default_block_class() -> String {
    DEFAULT_BLOCK_CLASS.to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_players() -> Vec<PlayerEntry> {
    FACTORIES
        .iter()
        .map(|(kind, _)| PlayerEntry::new(*kind))
        .collect()
}

/// One player to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Factory name (`video`, `audio`, `link`)
    pub kind: String,
    /// Rank override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Claimed file extensions override (media element players only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl PlayerEntry {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            rank: None,
            enabled: true,
            extensions: None,
        }
    }
}

/// Embedder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// CSS class of the block container
    #[serde(default = "default_block_class")]
    pub block_class: String,
    /// Players in registration order
    #[serde(default = "default_players")]
    pub players: Vec<PlayerEntry>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            block_class: default_block_class(),
            players: default_players(),
        }
    }
}

impl EmbedConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: EmbedConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration for mistakes the registry cannot recover from
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.players {
            let kind = entry.kind.to_ascii_lowercase();
            if !FACTORIES.iter().any(|(name, _)| *name == kind) {
                return Err(Error::UnknownPlayer(entry.kind.clone()));
            }
            if !seen.insert(kind.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "player '{}' is listed more than once",
                    entry.kind
                )));
            }
            match entry.extensions {
                Some(ref extensions) if kind == "link" => {
                    if !extensions.is_empty() {
                        return Err(Error::InvalidConfig(
                            "the link player claims every URL and takes no extensions".to_string(),
                        ));
                    }
                }
                Some(ref extensions) if extensions.is_empty() => {
                    return Err(Error::InvalidConfig(format!(
                        "player '{}' has an empty extension list",
                        entry.kind
                    )));
                }
                _ => {}
            }
        }

        let enabled = self
            .players
            .iter()
            .filter(|p| p.enabled && p.rank.map_or(true, |r| r >= 0))
            .count();
        if enabled == 0 {
            warn!("Configuration enables no players, every embed will be empty");
        }

        Ok(())
    }

    /// Build the player registry this configuration describes
    pub fn build_registry(&self) -> Result<PlayerRegistry> {
        let players = self
            .players
            .iter()
            .map(create_player)
            .collect::<Result<Vec<_>>>()?;
        Ok(PlayerRegistry::new(players))
    }
}
