//! CLI command implementations

use crate::output::{to_json, OutputFormat};
use anyhow::Context;
use kino_embed_core::{Dimension, EmbedConfig, EmbedOptions, Embedder, MediaUrl};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Arguments of the `embed` command
pub struct EmbedRequest {
    pub urls: Vec<String>,
    pub name: String,
    pub width: String,
    pub height: String,
    pub block: bool,
    pub fallback_to_blank: bool,
    pub options: Vec<String>,
}

#[derive(Serialize)]
struct EmbedOutput<'a> {
    urls: &'a [String],
    html: String,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    url: &'a str,
    embeddable: bool,
}

#[derive(Serialize)]
struct PlayerOutput<'a> {
    id: &'a str,
    rank: i32,
    markers: Vec<String>,
}

/// Build the embedder from a configuration file, or the defaults
pub fn load_embedder(config: Option<&Path>) -> anyhow::Result<Embedder> {
    let config = match config {
        Some(path) => EmbedConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => EmbedConfig::default(),
    };
    debug!(players = config.players.len(), "Configuration loaded");
    Ok(Embedder::from_config(&config)?)
}

/// Embed one URL, or several as alternatives of the same media
pub fn embed(embedder: &Embedder, request: &EmbedRequest, format: &str) -> anyhow::Result<()> {
    let urls = parse_urls(&request.urls)?;
    let width: Dimension = request.width.parse()?;
    let height: Dimension = request.height.parse()?;

    let mut options = EmbedOptions::new()
        .with_block(request.block)
        .with_fallback_to_blank(request.fallback_to_blank);
    for raw in &request.options {
        let (key, value) = parse_option(raw)?;
        options = options.with_extra(key, value);
    }

    let html = match urls.as_slice() {
        [url] => embedder.embed_url(url, &request.name, width, height, &options)?,
        _ => embedder.embed_alternatives(&urls, &request.name, width, height, &options)?,
    };

    match OutputFormat::from(format) {
        OutputFormat::Json => {
            let output = EmbedOutput { urls: &request.urls, html };
            println!("{}", to_json(&output)?);
        }
        OutputFormat::Text => println!("{}", html),
    }

    Ok(())
}

/// Report whether each URL can be embedded richer than a plain link
pub fn check(embedder: &Embedder, raw_urls: &[String], format: &str) -> anyhow::Result<()> {
    let urls = parse_urls(raw_urls)?;
    let options = EmbedOptions::default();

    let results: Vec<_> = raw_urls
        .iter()
        .zip(&urls)
        .map(|(raw, url)| CheckOutput {
            url: raw,
            embeddable: embedder.can_embed_url(url, &options),
        })
        .collect();

    match OutputFormat::from(format) {
        OutputFormat::Json => println!("{}", to_json(&results)?),
        OutputFormat::Text => {
            for result in &results {
                let status = if result.embeddable { "embeddable" } else { "link only" };
                println!("{:<12} {}", status, result.url);
            }
            if urls.len() > 1 {
                println!(
                    "\nAs alternatives: {}",
                    if embedder.can_embed_urls(&urls, &options) { "embeddable" } else { "link only" }
                );
            }
        }
    }

    Ok(())
}

/// Print the marker pattern
pub fn markers(embedder: &Embedder, format: &str) -> anyhow::Result<()> {
    let pattern = embedder.embeddable_markers();

    match OutputFormat::from(format) {
        OutputFormat::Json => {
            let markers = pattern.map(|p| p.markers().to_vec()).unwrap_or_default();
            let output = serde_json::json!({
                "pattern": pattern.map(|p| p.as_str()),
                "markers": markers,
            });
            println!("{}", to_json(&output)?);
        }
        OutputFormat::Text => match pattern {
            Some(pattern) => println!("{}", pattern),
            None => println!("No markers defined"),
        },
    }

    Ok(())
}

/// List enabled players in rank order
pub fn players(embedder: &Embedder, format: &str) -> anyhow::Result<()> {
    let players: Vec<_> = embedder
        .players()
        .iter()
        .map(|p| PlayerOutput {
            id: p.id(),
            rank: p.rank(),
            markers: p.embeddable_markers(),
        })
        .collect();

    match OutputFormat::from(format) {
        OutputFormat::Json => println!("{}", to_json(&players)?),
        OutputFormat::Text => {
            println!("Players ({}):", players.len());
            for (i, p) in players.iter().enumerate() {
                println!("  {}. {:<8} rank {:>4}  {}", i + 1, p.id, p.rank, p.markers.join(" "));
            }
        }
    }

    Ok(())
}

fn parse_urls(raw: &[String]) -> anyhow::Result<Vec<MediaUrl>> {
    raw.iter()
        .map(|u| MediaUrl::parse(u).with_context(|| format!("Invalid URL '{}'", u)))
        .collect()
}

/// Parse `key=value`; values that are valid JSON keep their type
fn parse_option(raw: &str) -> anyhow::Result<(String, serde_json::Value)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Option '{}' is not key=value", raw))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Option '{}' has an empty key", raw);
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
