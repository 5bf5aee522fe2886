//! Inference latency for the bundled emotion model
//!
//! Run with: cargo bench -p emotext-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use emotext_classifiers::{EmotionClassifier, EmotionPipeline, GlyphTable, LinearTextClassifier};

fn load_model() -> LinearTextClassifier {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/text_emotion.json");
    LinearTextClassifier::load(path).expect("Failed to load bundled model")
}

fn benchmark_distribution(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let model = load_model();

    let test_cases = vec![
        ("short", "I am so happy today"),
        ("negated", "I am not happy at all"),
        (
            "paragraph",
            "I was terrified when the lights went out, then suddenly everyone shouted surprise \
             and I could not stop laughing. What a wonderful, unexpected evening with friends.",
        ),
    ];

    let mut group = c.benchmark_group("LinearTextClassifier");
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("predict_distribution", name), &text, |b, text| {
            b.iter(|| rt.block_on(async { model.predict_distribution(black_box(text)).await.unwrap() }));
        });
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let pipeline = EmotionPipeline::new(Arc::new(load_model()), GlyphTable::default());

    c.bench_function("pipeline_analyze", |b| {
        b.iter(|| rt.block_on(async { pipeline.analyze(black_box("He makes me furious")).await.unwrap() }));
    });
}

criterion_group!(benches, benchmark_distribution, benchmark_pipeline);
criterion_main!(benches);
