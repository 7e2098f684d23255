//! Metrics lookup and text measurement benchmarks
//!
//! Run with: `cargo bench metrics_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std14_fonts::encoding::{BaseEncoding, DifferencesEncoder};
use std14_fonts::{StandardFont, StandardFontName};

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. 0123456789 \u{e9}\u{e8}\u{20ac}";

fn bench_glyph_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_lookup");

    for name in [
        StandardFontName::Helvetica,
        StandardFontName::TimesBoldItalic,
        StandardFontName::Courier,
        StandardFontName::Symbol,
    ] {
        let font = StandardFont::new(name);
        group.bench_with_input(BenchmarkId::new("hit", name), &font, |b, font| {
            b.iter(|| font.glyph_metrics(black_box("space")))
        });
        group.bench_with_input(BenchmarkId::new("miss", name), &font, |b, font| {
            b.iter(|| font.glyph_metrics(black_box("nonexistent_glyph")))
        });
    }

    group.finish();
}

fn bench_measure_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_text");

    let helvetica = StandardFont::helvetica();
    group.bench_function("win_ansi", |b| {
        b.iter(|| helvetica.measure_text(black_box(SAMPLE_TEXT), 12.0))
    });

    let custom = StandardFont::helvetica().with_encoder(
        DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_run(0x80, &["Lslash", "lslash", "Sacute", "sacute"])
            .unwrap(),
    );
    group.bench_function("differences", |b| {
        b.iter(|| custom.measure_text(black_box(SAMPLE_TEXT), 12.0))
    });

    let encoded: Vec<u8> = SAMPLE_TEXT.bytes().filter(u8::is_ascii).collect();
    group.bench_function("bytes", |b| {
        b.iter(|| helvetica.measure_bytes(black_box(&encoded), 12.0))
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let font = StandardFont::times_roman();
    c.bench_function("to_pdf_object", |b| b.iter(|| black_box(&font).to_pdf_object()));
}

criterion_group!(
    benches,
    bench_glyph_lookup,
    bench_measure_text,
    bench_serialization
);
criterion_main!(benches);
