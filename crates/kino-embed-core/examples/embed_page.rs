//! Page embedding example
//!
//! Demonstrates pre-filtering the links of a page with the marker pattern
//! and embedding the ones that hit.
//!
//! Run with: cargo run -p kino-embed-core --example embed_page

use kino_embed_core::{Dimension, EmbedOptions, Embedder, MediaUrl};

fn main() {
    println!("Kino Embed Core - Page Embedding Example");
    println!("==========================================\n");

    let links = [
        "https://cdn.example.com/keynote.webm?d=640x360",
        "/wiki/Release_Notes",
        "podcast/episode-12.mp3",
        "slides.pdf",
        "trailer.mov#d=100%x480",
    ];

    let embedder = Embedder::default();
    let options = EmbedOptions::default().with_block(true);

    let Some(pattern) = embedder.embeddable_markers() else {
        println!("No players define markers, nothing to embed.");
        return;
    };
    println!("Marker pattern: {}\n", pattern);

    for link in links {
        if !pattern.is_match(link) {
            println!("{:<50} skipped by marker pattern", link);
            continue;
        }

        let url = match MediaUrl::parse(link) {
            Ok(url) => url,
            Err(e) => {
                println!("{:<50} {}", link, e);
                continue;
            }
        };

        if !embedder.can_embed_url(&url, &options) {
            println!("{:<50} no player can embed it", link);
            continue;
        }

        match embedder.embed_url(&url, "", Dimension::Unspecified, Dimension::Unspecified, &options) {
            Ok(html) => println!("{:<50} {}", link, html),
            Err(e) => println!("{:<50} [{}] {}", link, e.error_code(), e),
        }
    }
}
