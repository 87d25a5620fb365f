//! Benchmarks for mdsite rendering performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(section_count: usize) -> String {
    let mut markdown = String::from("# Benchmark Document\n\n");

    for i in 0..section_count {
        markdown.push_str(&format!("## Section {}\n\n", i + 1));
        markdown.push_str(
            "Some **bold** text, some *italic* text, `inline code` and a [link](https://example.com).\n\n",
        );
        markdown.push_str("* first item\n* second *item*\n- third item\n\n");
        markdown.push_str("1. one\n2. two\n3. three\n\n");
        markdown.push_str("> a quote\n> spanning lines\n\n");
        markdown.push_str("```\nfn main() {\n    println!(\"hi\");\n}\n```\n\n");
        markdown.push_str("![an image](/images/bench.png)\n\n");
    }

    markdown
}

/// Benchmark inline resolution of a single line.
fn bench_inline(c: &mut Criterion) {
    let text = "This is **text** with an *italic* word and a `code block` and an ![image](https://i.imgur.com/x.jpeg) and a [link](https://boot.dev)";

    c.bench_function("inline_resolve", |b| {
        b.iter(|| mdsite::parser::inline::resolve(black_box(text)).unwrap());
    });
}

/// Benchmark full document rendering at various sizes.
fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_to_html");

    for section_count in [1, 10, 100].iter() {
        let markdown = create_test_document(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| mdsite::markdown_to_html(black_box(&markdown)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark title extraction.
fn bench_title(c: &mut Criterion) {
    let markdown = create_test_document(10);

    c.bench_function("extract_title", |b| {
        b.iter(|| mdsite::extract_title(black_box(&markdown)).unwrap());
    });
}

criterion_group!(benches, bench_inline, bench_document, bench_title);
criterion_main!(benches);
