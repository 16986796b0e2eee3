//! Color resolution benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use term_strings::{ansi, color, ColorMode, ColorTable, Resolver, Target};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let resolver = Resolver::default();

    group.bench_function("named_lookup", |b| {
        b.iter(|| black_box(resolver.named(Target::Foreground).get(black_box("cornflowerblue"))))
    });

    group.bench_function("name_sequence", |b| {
        b.iter(|| black_box(resolver.get_color_sequence(black_box("cornflowerblue"), Target::Foreground)))
    });

    group.bench_function("hex_sequence", |b| {
        b.iter(|| black_box(resolver.get_color_sequence(black_box("#6495ed"), Target::Background)))
    });

    group.finish();
}

fn bench_build_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let table = ColorTable::bundled();

    for mode in [ColorMode::TrueColor, ColorMode::Ansi256, ColorMode::Ansi16] {
        group.bench_function(format!("build_{:?}", mode), |b| {
            b.iter(|| black_box(Resolver::new(table.clone(), mode)))
        });
    }

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("ansi");

    let styled = format!(
        "{}Line: {}OK{}\r\n",
        color::screen("black").unwrap_or_default(),
        color::front("green").unwrap_or_default(),
        color::FRONT_OUT
    )
    .repeat(500);
    group.throughput(Throughput::Bytes(styled.len() as u64));

    group.bench_function("strip", |b| b.iter(|| black_box(ansi::strip(black_box(&styled)))));

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_build_resolver, bench_strip);

criterion_main!(benches);
