//! Minimal HTML writer used by the block container and the default players

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for use in element content or a double-quoted attribute
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// An element with attributes, rendered as an open/close pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    /// Add a `name="value"` attribute
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Add the attribute only when `value` is non-empty
    pub fn attr_if_set(self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self
        } else {
            self.attr(name, value)
        }
    }

    /// Add a valueless boolean attribute such as `controls`
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn open(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attrs {
            match value {
                Some(value) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                None => {
                    let _ = write!(out, " {}", name);
                }
            }
        }
        out.push('>');
        out
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Render as a void element (`<source ...>`)
    pub fn void(&self) -> String {
        self.open()
    }

    /// Render around already-escaped inner markup
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.open(), inner, self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_tag_rendering() {
        let tag = Tag::new("video")
            .attr("src", "a.mp4?x=1&y=2")
            .attr_if_set("width", "")
            .flag("controls", true)
            .flag("autoplay", false);
        assert_eq!(tag.open(), r#"<video src="a.mp4?x=1&amp;y=2" controls>"#);
        assert_eq!(tag.wrap("fallback"), r#"<video src="a.mp4?x=1&amp;y=2" controls>fallback</video>"#);
    }
}
