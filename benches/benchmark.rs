//! Performance benchmarks for page-tree.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small article page with navigation chrome
//! - A news index with story cards
//! - Real-world HTML files, when a local dataset is present

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use page_tree::{parse, parse_with_options, Options};
use std::fs;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <meta name="theme-color" content="#336699">
</head>
<body>
    <nav aria-label="Main navigation">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some
        <a href="/link">meaningful</a> content for the reading tree.</p>
        <table>
            <tr><th>Year</th><th>Value</th></tr>
            <tr><td>2023</td><td>12</td></tr>
            <tr><td>2024</td><td>17</td></tr>
        </table>
        <ul>
            <li>First point</li>
            <li>Second point</li>
        </ul>
    </article>
    <footer>
        <a href="/privacy">Privacy</a>
    </footer>
</body>
</html>
"#;

fn news_index_html() -> String {
    let cards: String = (0..30)
        .map(|i| {
            format!(
                r#"<div class="card"><h3><a href="/story/{i}">Story number {i} about the city council</a></h3>
                <p>A short description of story {i} that is long enough to be kept.</p>
                <span class="author">By Reporter {i}</span></div>"#
            )
        })
        .collect();
    format!("<html><body><main>{cards}</main></body></html>")
}

fn bench_parse_default(c: &mut Criterion) {
    c.bench_function("parse_default", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML)));
    });
}

fn bench_parse_with_options(c: &mut Criterion) {
    let options = Options {
        include_tables: false,
        url: Some("https://example.com/articles/".to_string()),
        ..Options::default()
    };

    c.bench_function("parse_with_options", |b| {
        b.iter(|| parse_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_news_index(c: &mut Criterion) {
    let html = news_index_html();
    c.bench_function("parse_news_index", |b| {
        b.iter(|| parse(black_box(&html)));
    });
}

/// Benchmark with real-world HTML files of varying sizes
fn bench_real_world_html(c: &mut Criterion) {
    let html_dir = "../data/html_files";
    let sample_files = ["0001.html", "0010.html", "0100.html"];

    let mut group = c.benchmark_group("real_world");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("parse", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| parse(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_options,
    bench_news_index,
    bench_real_world_html
);
criterion_main!(benches);
