use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use wordindex::{IndexConfig, Tokenizer, WordIndex};

fn corpus_text(words: usize) -> String {
    (0..words)
        .map(|i| format!("Word{} ", i % 2000))
        .collect()
}

fn bench_index_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_document");
    group.sample_size(50);

    let text = corpus_text(10_000);
    let tokenizer = Tokenizer::default();
    let doc: Arc<str> = Arc::from("doc1.txt");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("djb2_10k_words", |b| {
        b.iter(|| {
            let mut index = WordIndex::new(IndexConfig::default());
            black_box(index.index_document(&tokenizer, &doc, text.as_bytes()).unwrap());
        });
    });

    group.bench_function("ahash_10k_words", |b| {
        b.iter(|| {
            let mut index =
                WordIndex::with_hasher(IndexConfig::default(), ahash::RandomState::new());
            black_box(index.index_document(&tokenizer, &doc, text.as_bytes()).unwrap());
        });
    });

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    let tokenizer = Tokenizer::default();
    let doc: Arc<str> = Arc::from("doc1.txt");
    let words: Vec<String> = (0..2000).map(|i| format!("word{}", i)).collect();

    for buckets in [1009, 10007] {
        let mut index = WordIndex::new(IndexConfig { buckets });
        index
            .index_document(&tokenizer, &doc, corpus_text(2000).as_bytes())
            .unwrap();

        group.bench_function(format!("buckets_{}", buckets), |b| {
            let mut counter = 0;
            b.iter(|| {
                black_box(index.find(&words[counter % words.len()]));
                counter += 1;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_document, bench_find);
criterion_main!(benches);
