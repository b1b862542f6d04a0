//! Heading numbering micro-benchmarks
//!
//! Measures the multi-pass numbering on its own and the full menu build
//! against the in-memory document, for pages of growing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docsite::menu::number_levels;
use docsite::{HeadingLevel, InMemoryDocument, Site, SiteConfig};
use std::hint::black_box;

/// A repeating chapter/section/subsection outline of `count` headings.
fn outline(count: usize) -> Vec<HeadingLevel> {
    const PATTERN: [u8; 8] = [1, 2, 3, 3, 2, 3, 4, 2];
    (0..count)
        .map(|i| HeadingLevel::new(PATTERN[i % PATTERN.len()]).expect("pattern levels are valid"))
        .collect()
}

fn page(levels: &[HeadingLevel]) -> InMemoryDocument {
    let mut doc = InMemoryDocument::new();
    let body = doc.body();
    doc.append_with_id(body, "div", "menu");
    for (i, level) in levels.iter().enumerate() {
        doc.append_text_element(body, &level.tag_name(), &format!("Section {}", i));
    }
    doc
}

fn benchmark_number_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_levels");

    for count in [10, 100, 1000] {
        let levels = outline(count);
        group.bench_with_input(BenchmarkId::new("headings", count), &levels, |b, levels| {
            b.iter(|| number_levels(black_box(levels)))
        });
    }

    group.finish();
}

fn benchmark_build_menu(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_menu");
    let site = Site::new(SiteConfig::default());

    for count in [10, 100, 500] {
        let template = page(&outline(count));
        group.bench_with_input(BenchmarkId::new("headings", count), &template, |b, template| {
            b.iter(|| {
                let mut doc = template.clone();
                site.build_menu(&mut doc).expect("menu container present")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_number_levels, benchmark_build_menu);
criterion_main!(benches);
