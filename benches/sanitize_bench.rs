// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmlguard::{parse_fragment, sanitize, Sanitizer, SanitizerConfig};

const RELEASE_NOTES: &str = r#"
    <div class="notes">
        <p lang="en">This release <b>fixes</b> several <i>crashes</i>.</p>
        <p style="margin: 0; color: red">See the <a href="https://example.com/changelog" onclick="track()">changelog</a>.</p>
        <img src="https://example.com/shot.png" alt="screenshot" width="640">
        <!-- internal: do not ship -->
        <script>alert(document.cookie)</script>
        <a href="javascript:alert(1)">click</a>
    </div>
"#;

fn sanitize_benchmark(c: &mut Criterion) {
    c.bench_function("sanitize_release_notes", |b| {
        b.iter(|| black_box(sanitize(black_box(RELEASE_NOTES)).unwrap()))
    });

    let strip = Sanitizer::new(SanitizerConfig::stripping());
    c.bench_function("sanitize_release_notes_strip", |b| {
        b.iter(|| black_box(strip.sanitize_string(black_box(RELEASE_NOTES)).unwrap()))
    });
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_fragment", |b| {
        b.iter(|| black_box(parse_fragment(black_box(RELEASE_NOTES)).unwrap().node_count()))
    });

    let nested = "<div>".repeat(2_000);
    c.bench_function("sanitize_deep_nesting", |b| {
        b.iter(|| black_box(sanitize(black_box(&nested)).unwrap()))
    });
}

criterion_group!(benches, sanitize_benchmark, parse_benchmark);
criterion_main!(benches);
