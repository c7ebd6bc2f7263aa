//! Compile benchmark: Measure script compilation throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use painter::compile;

fn script(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        match i % 5 {
            0 => text.push_str("white\n"),
            1 => text.push_str("bgrect 0.1 0.1 0.9 0.9\n"),
            2 => text.push_str("figure 0.5 0.5\n"),
            3 => text.push_str("move 120 340\n"),
            _ => text.push_str("update\n"),
        }
    }
    text
}

fn compile_small(c: &mut Criterion) {
    let text = "white\nbgrect 0.25 0.25 0.75 0.75\nfigure 0.5 0.5\nborder red\nupdate\n";
    c.bench_function("compile_5_lines", |b| b.iter(|| compile(black_box(text))));
}

fn compile_large(c: &mut Criterion) {
    let text = script(10_000);
    let mut group = c.benchmark_group("compile_large");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("10k_lines", |b| b.iter(|| compile(black_box(&text))));
    group.finish();
}

fn compile_error(c: &mut Criterion) {
    let text = format!("{}bogus\n", script(1000));
    c.bench_function("compile_error_at_end", |b| {
        b.iter(|| compile(black_box(&text)).is_err())
    });
}

criterion_group!(benches, compile_small, compile_large, compile_error);
criterion_main!(benches);
