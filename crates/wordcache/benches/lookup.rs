use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use wordcache::CachedIndex;
use wordindex::{IndexConfig, Tokenizer, WordIndex};

fn build(words: usize, capacity: usize) -> (CachedIndex, Vec<String>) {
    let tokenizer = Tokenizer::default();
    let mut index = WordIndex::new(IndexConfig::default());
    let vocabulary: Vec<String> = (0..words).map(|i| format!("word{}", i)).collect();

    for (i, name) in ["doc1.txt", "doc2.txt", "doc3.txt"].iter().enumerate() {
        let text: String = vocabulary
            .iter()
            .skip(i)
            .step_by(2)
            .map(|w| format!("{} ", w))
            .collect();
        index
            .index_document(&tokenizer, &Arc::from(*name), text.as_bytes())
            .unwrap();
    }

    (CachedIndex::new(index, tokenizer, capacity), vocabulary)
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_lookup");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("hot_5_words", |b| {
        let (cache, words) = build(1000, 5);

        // Warm the cache
        for word in &words[..5] {
            cache.lookup(word).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.lookup(&words[counter % 5]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("cycling_1000_words", |b| {
        let (cache, words) = build(1000, 5);

        let mut counter = 0;
        b.iter(|| {
            // Access pattern that guarantees misses
            black_box(cache.lookup(&words[counter % words.len()]).unwrap());
            counter += 1;
        });
    });

    group.bench_function("not_found", |b| {
        let (cache, _) = build(1000, 5);

        b.iter(|| {
            black_box(cache.lookup("durian").unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_lookup, bench_cache_miss);
criterion_main!(benches);
