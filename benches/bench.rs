//! Criterion benchmarks for the taxon classifier.
//!
//! Covers the two hot paths:
//! - Text analysis and tokenization
//! - Training and classification

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use taxon::analysis::analyzer::Analyzer;
use taxon::analysis::analyzer::standard::StandardAnalyzer;
use taxon::classification::bayes::BayesClassifier;

/// Generate labeled training texts for benchmarking.
fn training_corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        ("programming", "rust ownership borrow checker compiles fast"),
        ("programming", "python scripts automate data pipelines"),
        ("programming", "refactor the module and add unit tests"),
        ("cooking", "knead the dough and let it rest overnight"),
        ("cooking", "simmer the broth with onions and herbs"),
        ("cooking", "whisk eggs butter and sugar until fluffy"),
        ("sports", "the striker scored twice in the second half"),
        ("sports", "marathon training requires long slow runs"),
        ("sports", "the team defended the title on home court"),
    ]
}

fn trained_classifier() -> BayesClassifier {
    let mut classifier =
        BayesClassifier::new(["programming", "cooking", "sports"]).unwrap();
    for (category, text) in training_corpus() {
        classifier.train(category, text).unwrap();
    }
    classifier
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new().unwrap();
    let text = "The quick brown fox jumps over the lazy dog while the \
                referee whistles and the crowd cheers loudly in the stands";

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("standard_analyzer", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
            black_box(tokens)
        })
    });
    group.finish();
}

fn bench_train(c: &mut Criterion) {
    let corpus = training_corpus();

    c.bench_function("train_corpus", |b| {
        b.iter(|| {
            let mut classifier =
                BayesClassifier::new(["programming", "cooking", "sports"]).unwrap();
            for (category, text) in &corpus {
                classifier.train(category, text).unwrap();
            }
            black_box(classifier)
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = trained_classifier();

    c.bench_function("classify", |b| {
        b.iter(|| {
            classifier
                .classify(black_box("slow simmered broth with fresh herbs"))
                .unwrap()
        })
    });

    c.bench_function("log_classifications", |b| {
        b.iter(|| {
            classifier
                .log_classifications(black_box("training runs before the marathon"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_analysis, bench_train, bench_classify);
criterion_main!(benches);
