use criterion::{criterion_group, criterion_main, Criterion};
use path_abbrev::abbreviate;
use std::hint::black_box;

fn generate_paths(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("/home/user/projects/group-{}/repo-{}/src/module/file-{}.rs", i % 7, i, i))
        .collect()
}

fn bench_abbreviate(c: &mut Criterion) {
    let paths = generate_paths(10000);
    let unicode_paths: Vec<String> = paths.iter().map(|p| p.replace("user", "usuário")).collect();

    let mut group = c.benchmark_group("abbreviate");

    group.bench_function("ascii_fits", |b| {
        b.iter(|| {
            for path in &paths {
                let _ = black_box(abbreviate(black_box(path), 200));
            }
        })
    });

    group.bench_function("ascii_truncated", |b| {
        b.iter(|| {
            for path in &paths {
                let _ = black_box(abbreviate(black_box(path), 30));
            }
        })
    });

    group.bench_function("unicode_truncated", |b| {
        b.iter(|| {
            for path in &unicode_paths {
                let _ = black_box(abbreviate(black_box(path), 30));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_abbreviate);
criterion_main!(benches);
