//! Benchmarks for gallery packing and caret matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mosaic::{find_token_at_caret, pack_gallery, GalleryConfig, Trigger};

fn sample_ratios(count: usize) -> Vec<f64> {
    // A realistic mix of landscape, portrait and square media
    let ratios = [1.5, 0.67, 1.0, 1.78, 0.75, 2.5, 1.33, 0.4];
    (0..count).map(|i| ratios[i % ratios.len()]).collect()
}

fn sample_text(size: usize) -> String {
    let words = ["hello ", "@alice ", "see ", "this ", "from:bob ", "@carol-42 ", "ok "];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(words[i % words.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_pack_gallery(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_gallery");
    let config = GalleryConfig::default();

    for count in [4, 20, 200] {
        let ratios = sample_ratios(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("justified", count), &ratios, |b, ratios| {
            b.iter(|| pack_gallery(black_box(ratios), black_box(900), &config))
        });
    }

    group.finish();
}

fn bench_find_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_token_at_caret");
    let trigger = Trigger::search();

    for size in [100, 1_000, 10_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("caret_at_end", size), &text, |b, text| {
            b.iter(|| find_token_at_caret(black_box(text), text.len(), &trigger))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack_gallery, bench_find_token);
criterion_main!(benches);
