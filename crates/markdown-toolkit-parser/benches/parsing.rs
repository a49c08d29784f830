use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markdown_toolkit_parser::{parse, render::to_html};
use pulldown_cmark::Parser;
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("parse", size), &content, |b, content| {
            b.iter(|| parse(std::hint::black_box(content)));
        });
        group.bench_with_input(
            BenchmarkId::new("pulldown_cmark", size),
            &content,
            |b, content| {
                b.iter(|| {
                    let events: Vec<_> = Parser::new(std::hint::black_box(content)).collect();
                    std::hint::black_box(events);
                });
            },
        );
    }

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(10);

    let lists = common::generate_nested_lists(200);
    group.bench_function("nested_lists", |b| {
        b.iter(|| parse(std::hint::black_box(&lists)));
    });

    let soup = common::generate_emphasis_soup(200);
    group.bench_function("emphasis_soup", |b| {
        b.iter(|| parse(std::hint::black_box(&soup)));
    });

    for (name, input) in common::generate_unclosed_openers() {
        group.bench_function(format!("unclosed_{name}"), |b| {
            b.iter(|| parse(std::hint::black_box(&input)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let doc = parse(&common::generate_markdown_content(100));
    c.bench_function("to_html", |b| {
        b.iter(|| to_html(std::hint::black_box(&doc)));
    });
}

criterion_group!(benches, bench_parse, bench_pathological, bench_render);
criterion_main!(benches);
