//! Fallback composition
//!
//! Each player renders a [`Fragment`]. A fragment is either finished markup
//! or a wrapper with exactly one slot where the next weaker player's output
//! goes (a `<video>` element whose body is a download link for clients
//! without video support, for example). A [`Composition`] chains fragments
//! in rank order and renders them depth first:
//!
//! ```text
//!   video.open ─┐
//!               audio.open ─┐
//!                           link
//!               audio.close ┘
//!   video.close ┘
//! ```
//!
//! Nesting is structural, so player markup is never rescanned for a
//! placeholder and cannot collide with it.

use crate::error::{Error, Result};

/// Token marking the fallback slot in a markup template
///
/// Only [`Fragment::from_template`] looks for it.
pub const FALLBACK_SLOT: &str = "{{kino:fallback}}";

/// Rendered output of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Complete markup, nothing weaker can be nested inside
    Leaf(String),
    /// Markup surrounding one fallback slot
    Wrapper { open: String, close: String },
}

impl Fragment {
    pub fn leaf(markup: impl Into<String>) -> Self {
        Fragment::Leaf(markup.into())
    }

    pub fn wrapper(open: impl Into<String>, close: impl Into<String>) -> Self {
        Fragment::Wrapper {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Build a fragment from markup that marks its slot with [`FALLBACK_SLOT`]
    ///
    /// More than one slot is a contract violation by `player`.
    pub fn from_template(player: &str, template: &str) -> Result<Self> {
        match template.matches(FALLBACK_SLOT).count() {
            0 => Ok(Fragment::leaf(template)),
            1 => {
                let (open, close) = template
                    .split_once(FALLBACK_SLOT)
                    .unwrap_or((template, ""));
                Ok(Fragment::wrapper(open, close))
            }
            n => Err(Error::player(
                player,
                format!("markup contains {} fallback slots, at most one is allowed", n),
            )),
        }
    }

    /// Returns true if weaker markup can be nested inside
    pub fn has_slot(&self) -> bool {
        matches!(self, Fragment::Wrapper { .. })
    }

    /// A wrapper that adds no markup around its slot
    pub fn is_bare_slot(&self) -> bool {
        matches!(self, Fragment::Wrapper { open, close } if open.is_empty() && close.is_empty())
    }
}

/// Output of an embed request under construction, outermost layer first
///
/// Every layer except the last is a wrapper whose slot holds the next layer.
/// A composition holding only bare slots still renders as nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    layers: Vec<Fragment>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// No layer has contributed markup yet
    pub fn is_blank(&self) -> bool {
        self.layers.iter().all(Fragment::is_bare_slot)
    }

    /// A slot is still available for weaker markup
    pub fn is_open(&self) -> bool {
        self.layers.last().map_or(true, Fragment::has_slot)
    }

    /// Number of nested layers
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Place `fragment` in the open slot
    ///
    /// Returns false and drops the fragment when the composition is closed.
    pub fn insert(&mut self, fragment: Fragment) -> bool {
        if !self.is_open() {
            return false;
        }
        self.layers.push(fragment);
        true
    }

    /// Render all layers; an unfilled slot renders as nothing
    pub fn render(&self) -> String {
        let mut out = String::new();
        for layer in &self.layers {
            match layer {
                Fragment::Leaf(markup) => out.push_str(markup),
                Fragment::Wrapper { open, .. } => out.push_str(open),
            }
        }
        for layer in self.layers.iter().rev() {
            if let Fragment::Wrapper { close, .. } = layer {
                out.push_str(close);
            }
        }
        out
    }
}
