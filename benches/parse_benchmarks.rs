//! Performance benchmarks for parsing and AST traversal.
//!
//! - Parsing: in-memory sources of increasing size
//! - Traversal: full cursor walks and tokenization of a parsed unit
//! - Reparsing: reuse of a unit after an edit

use cindex::prelude::*;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// A C source with `count` small functions calling each other.
fn generate_source(count: usize) -> String {
    let mut source = String::from("struct point { int x; int y; };\n");
    for i in 0..count {
        source.push_str(&format!(
            "static int f{i}(struct point *p) {{ return p->x * {i} + p->y; }}\n"
        ));
    }
    source.push_str("int main(void) {\n  struct point p = {1, 2};\n  int sum = 0;\n");
    for i in 0..count {
        source.push_str(&format!("  sum += f{i}(&p);\n"));
    }
    source.push_str("  return sum;\n}\n");
    source
}

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/from_source");

    for (name, count) in [("tiny", 1), ("small", 50), ("medium", 500)] {
        let source = generate_source(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let unit = TranslationUnit::from_source(
                    black_box(&source),
                    Language::C,
                    &[] as &[&str],
                    TranslationUnitFlags::NONE,
                )
                .expect("Failed to parse source");
                black_box(unit.diagnostics().len())
            });
        });
    }

    group.finish();
}

fn traversal_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let source = generate_source(200);
    let unit = TranslationUnit::from_source(&source, Language::C, &[] as &[&str], TranslationUnitFlags::NONE)
        .expect("Failed to parse source");

    group.bench_function("descendants", |b| {
        b.iter(|| black_box(unit.cursor().descendants().len()));
    });

    group.bench_function("visit_children_kinds", |b| {
        b.iter(|| {
            let mut calls = 0usize;
            unit.cursor().visit_children(|cursor, _| {
                if cursor.kind() == CursorKind::CallExpr {
                    calls += 1;
                }
                ChildVisit::Recurse
            });
            black_box(calls)
        });
    });

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tokenize", |b| {
        b.iter(|| black_box(unit.tokens(unit.cursor().extent()).len()));
    });

    group.finish();
}

fn reparse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("reparse");
    let source = generate_source(200);
    let mut unit = TranslationUnit::from_source(
        &source,
        Language::C,
        &[] as &[&str],
        TranslationUnitFlags::default_editing(),
    )
    .expect("Failed to parse source");
    let unsaved = [UnsavedFile::new("main.c", source.as_str())];

    group.bench_function("medium_unchanged", |b| {
        b.iter(|| {
            let flags = unit.default_reparse_options();
            unit.reparse(black_box(&unsaved), flags).expect("Failed to reparse");
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    parse_benchmarks,
    traversal_benchmarks,
    reparse_benchmarks
);
criterion_main!(benches);
