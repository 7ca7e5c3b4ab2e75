//! Kino Embed CLI - Turn media links into embeddable HTML
//!
//! Features:
//! - Embed one URL or a set of alternative encodings
//! - Check whether links can be embedded richer than a plain link
//! - Print the marker pattern used to pre-filter links
//! - List the ranked players of a configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

/// Kino Embed CLI - Media embedding toolkit
#[derive(Parser)]
#[command(name = "kino-embed")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Embed media links as HTML with graceful fallback", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Player configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed media; several URLs are treated as alternatives of one item
    Embed {
        /// Media URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Media name used as title and link text
        #[arg(short, long, default_value = "")]
        name: String,

        /// Width in pixels or percent (e.g. 640, 100%)
        #[arg(long, default_value = "")]
        width: String,

        /// Height in pixels or percent
        #[arg(long, default_value = "")]
        height: String,

        /// Wrap the output in a block container
        #[arg(long)]
        block: bool,

        /// Output nothing instead of a bare link when no player matches
        #[arg(long)]
        fallback_to_blank: bool,

        /// Player option as key=value (repeatable), e.g. autoplay=true
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,
    },

    /// Check whether URLs can be embedded
    Check {
        /// Media URLs
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the combined marker pattern
    Markers,

    /// List enabled players in rank order
    Players,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    let embedder = commands::load_embedder(cli.config.as_deref())?;

    match cli.command {
        Commands::Embed { urls, name, width, height, block, fallback_to_blank, options } => {
            let request = commands::EmbedRequest {
                urls,
                name,
                width,
                height,
                block,
                fallback_to_blank,
                options,
            };
            commands::embed(&embedder, &request, &cli.format)?;
        }
        Commands::Check { urls } => {
            commands::check(&embedder, &urls, &cli.format)?;
        }
        Commands::Markers => {
            commands::markers(&embedder, &cli.format)?;
        }
        Commands::Players => {
            commands::players(&embedder, &cli.format)?;
        }
    }

    Ok(())
}
