//! Kino Embed Core - Media embedding with graceful fallback
//!
//! This crate turns links to media into embeddable markup:
//! - Ranked registry of player strategies (video, audio, plain link)
//! - Per-request selection of the players that support a set of alternatives
//! - Nested fallback composition, best player outermost
//! - Cheap capability queries and a marker pattern for pre-filtering links
//! - `d=WIDTHxHEIGHT` size hints in URLs
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Kino Embed Core                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │  Size Hint   │  │   Player     │  │   Marker     │           │
//! │  │  Extraction  │  │   Registry   │  │   Pattern    │           │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘           │
//! │         │                 │                 │                   │
//! │         └─────────────────┼─────────────────┘                   │
//! │                           │                                     │
//! │                    ┌──────┴──────┐                              │
//! │                    │  Embedder   │                              │
//! │                    └──────┬──────┘                              │
//! │                           │                                     │
//! │  ┌──────────────┐  ┌──────┴──────┐  ┌──────────────┐            │
//! │  │   Players    │  │  Fallback   │  │     HTML     │            │
//! │  │ video/audio/ │  │ Composition │  │    Writer    │            │
//! │  │    link      │  └─────────────┘  └──────────────┘            │
//! │  └──────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use kino_embed_core::{Dimension, EmbedOptions, Embedder, MediaUrl};
//!
//! let embedder = Embedder::default();
//! let url = MediaUrl::parse("clip.webm?d=320x240").unwrap();
//! let html = embedder
//!     .embed_url(&url, "Clip", Dimension::Unspecified, Dimension::Unspecified, &EmbedOptions::default())
//!     .unwrap();
//!
//! assert!(html.starts_with(r#"<video title="Clip" controls width="320" height="240">"#));
//! assert!(html.contains(r#"<a href="clip.webm" class="media-link">Clip</a>"#));
//! ```

pub mod error;
pub mod types;
pub mod html;
pub mod size_hint;
pub mod fragment;
pub mod player;
pub mod players;
pub mod markers;
pub mod registry;
pub mod config;
pub mod embedder;

pub use error::{Error, Result};
pub use types::*;
pub use fragment::{Composition, Fragment, FALLBACK_SLOT};
pub use player::{Player, LINK_RANK};
pub use players::{LinkPlayer, MediaElement, MediaTagPlayer};
pub use markers::MarkerPattern;
pub use registry::PlayerRegistry;
pub use config::{EmbedConfig, PlayerEntry};
pub use embedder::Embedder;
pub use size_hint::SizeHint;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the embed library
pub fn init() {
    tracing::info!(version = VERSION, "Kino Embed Core initialized");
}
