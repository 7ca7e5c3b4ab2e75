//! Output selection for the `--format` flag
//!
//! Text output is command specific and printed by each command. JSON output
//! is the command's serializable report, pretty printed.

use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a command report as pretty JSON
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Text);
    }

    #[test]
    fn test_to_json_is_pretty() {
        let json = to_json(&serde_json::json!({ "embeddable": true })).unwrap();
        assert_eq!(json, "{\n  \"embeddable\": true\n}");
    }
}
