//! Benchmark tests for kino-embed-core operations
//!
//! Run with: cargo bench -p kino-embed-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kino_embed_core::size_hint::SizeHint;
use kino_embed_core::{Dimension, EmbedOptions, Embedder, MediaUrl};

// ============================================================================
// Helpers
// ============================================================================

fn create_alternatives(count: usize) -> Vec<MediaUrl> {
    let extensions = ["webm", "mp4", "ogg", "mp3", "pdf"];
    (0..count)
        .map(|i| {
            let ext = extensions[i % extensions.len()];
            MediaUrl::parse(&format!("https://cdn.example.com/media/clip_{}.{}", i, ext)).unwrap()
        })
        .collect()
}

/// A document body with `links` anchors, a fifth of them pointing at media
fn generate_document(links: usize) -> Vec<String> {
    (0..links)
        .map(|i| {
            if i % 5 == 0 {
                format!("<a href=\"/files/talk_{}.mp4\">talk</a>", i)
            } else {
                format!("<a href=\"/wiki/Page_{}\">page</a>", i)
            }
        })
        .collect()
}

// ============================================================================
// Embedding
// ============================================================================

fn bench_embed_alternatives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Embed Alternatives");
    let embedder = Embedder::default();
    let options = EmbedOptions::default();

    for count in [1usize, 3, 10] {
        let alternatives = create_alternatives(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &alternatives, |b, alternatives| {
            b.iter(|| {
                black_box(
                    embedder
                        .embed_alternatives(
                            black_box(alternatives),
                            "Clip",
                            Dimension::Pixels(640),
                            Dimension::Pixels(360),
                            &options,
                        )
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_embed_url(c: &mut Criterion) {
    let embedder = Embedder::default();
    let options = EmbedOptions::default().with_block(true);
    let url = MediaUrl::parse("https://cdn.example.com/talk.webm?d=640x360").unwrap();

    c.bench_function("embed_url_with_size_hint", |b| {
        b.iter(|| {
            black_box(
                embedder
                    .embed_url(black_box(&url), "", Dimension::Unspecified, Dimension::Unspecified, &options)
                    .unwrap(),
            )
        });
    });
}

// ============================================================================
// Queries
// ============================================================================

fn bench_can_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Can Embed");
    let embedder = Embedder::default();
    let options = EmbedOptions::default();

    let video = vec![MediaUrl::parse("clip.mp4").unwrap()];
    let document = vec![MediaUrl::parse("notes.pdf").unwrap()];

    group.bench_function("supported", |b| {
        b.iter(|| black_box(embedder.can_embed_urls(black_box(&video), &options)));
    });
    group.bench_function("unsupported", |b| {
        b.iter(|| black_box(embedder.can_embed_urls(black_box(&document), &options)));
    });

    group.finish();
}

fn bench_marker_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Marker Prefilter");
    let embedder = Embedder::default();
    let pattern = embedder.embeddable_markers().unwrap();

    for links in [100usize, 1000] {
        let document = generate_document(links);
        group.bench_with_input(BenchmarkId::new("pattern", links), &document, |b, document| {
            b.iter(|| document.iter().filter(|link| pattern.is_match(link)).count());
        });
    }

    group.finish();
}

fn bench_size_hint(c: &mut Criterion) {
    let hinted = MediaUrl::parse("video.mp4?t=5&d=320x240").unwrap();
    let plain = MediaUrl::parse("video.mp4?t=5").unwrap();

    c.bench_function("size_hint_present", |b| {
        b.iter(|| black_box(SizeHint::extract(black_box(&hinted))));
    });
    c.bench_function("size_hint_absent", |b| {
        b.iter(|| black_box(SizeHint::extract(black_box(&plain))));
    });
}

criterion_group!(
    embed_benches,
    bench_embed_alternatives,
    bench_embed_url,
);

criterion_group!(
    query_benches,
    bench_can_embed,
    bench_marker_prefilter,
    bench_size_hint,
);

criterion_main!(
    embed_benches,
    query_benches,
);
