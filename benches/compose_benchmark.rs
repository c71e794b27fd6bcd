use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tailwindest::{create_tools, style, DynSelection, Style, Variants};

/// A style with `count` properties, one nested hover block every tenth
fn wide_style(count: usize) -> Style {
    let mut style = Style::new();
    for i in 0..count {
        if i % 10 == 9 {
            style.insert(
                &format!(":hover{}", i),
                style! { "backgroundColor" => "bg-sky-100", "padding" => "p-1" },
            );
        } else {
            style.insert(&format!("prop{}", i), format!("class-{}", i));
        }
    }
    style
}

/// Grouped builder with `groups` groups of four variants each
fn grouped(groups: usize) -> (Variants<DynSelection>, DynSelection) {
    let mut variants = create_tools().variants::<DynSelection>(wide_style(20));
    let mut selection = DynSelection::new();
    for g in 0..groups {
        let name = format!("group{}", g);
        variants = variants.named_group(
            &name,
            (0..4).map(|v| (format!("v{}", v), wide_style(5 + v))),
        );
        selection.insert(name, format!("v{}", g % 4));
    }
    (variants, selection)
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [10, 100, 1000] {
        let a = wide_style(size);
        let b = wide_style(size / 2);
        group.bench_with_input(BenchmarkId::new("properties", size), &size, |bench, _| {
            bench.iter(|| black_box(a.merge(&b)));
        });
    }

    group.finish();
}

fn benchmark_rotary(c: &mut Criterion) {
    let tw = create_tools();
    let rotary = tw.rotary(
        wide_style(30),
        (0..8).map(|i| (format!("k{}", i), wide_style(10))),
    );
    let composed = rotary.compose([wide_style(5), wide_style(15)]);
    let key = "k3".to_string();

    c.bench_function("rotary_pick", |b| b.iter(|| black_box(composed.pick(&key))));
    c.bench_function("rotary_class", |b| b.iter(|| black_box(composed.class(&key))));
}

fn benchmark_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants_resolve");

    for groups in [1, 4, 16] {
        let (variants, selection) = grouped(groups);
        group.bench_with_input(BenchmarkId::new("groups", groups), &groups, |b, _| {
            b.iter(|| black_box(variants.class(&selection)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_merge, benchmark_rotary, benchmark_variants);
criterion_main!(benches);
