//! Markdown to PDF conversion benchmarks
//!
//! Measures single-document conversion as the document grows, and batch
//! throughput for the sync and rayon executors.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdpdf::executor::{ExecutorImpl, RayonExecutor, SyncExecutor};
use mdpdf::{convert_source, run_batch, ConverterConfig};
use std::fs;
use std::hint::black_box;

fn sample_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("## Section {}\n\n", i));
        doc.push_str("Some body text that wraps across the page width, with *emphasis* and `code` mixed in.\n\n");
        doc.push_str("- first item\n- second item\n- third item\n\n");
        doc.push_str("```\nfn section() -> usize {\n    42\n}\n```\n\n---\n\n");
    }
    doc
}

fn benchmark_single_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_document");
    let config = ConverterConfig::default();

    for sections in [1, 10, 100] {
        let doc = sample_document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| convert_source(black_box(doc), &config).unwrap())
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let dir = tempfile::tempdir().unwrap();
    let inputs: Vec<_> = (0..16)
        .map(|i| {
            let path = dir.path().join(format!("doc{}.md", i));
            fs::write(&path, sample_document(20)).unwrap();
            path
        })
        .collect();
    let config = ConverterConfig::default();

    let executors = [
        ("sync", ExecutorImpl::Sync(SyncExecutor)),
        ("rayon", ExecutorImpl::Rayon(RayonExecutor::new())),
    ];
    for (name, executor) in &executors {
        group.bench_function(*name, |b| {
            b.iter(|| run_batch(inputs.clone(), &config, executor))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_document, benchmark_batch);
criterion_main!(benches);
