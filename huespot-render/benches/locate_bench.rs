use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use huespot_core::{GradientDescriptor, SafeZone};
use huespot_render::{rasterize, resolve_all};

fn bench_rasterize(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (descriptor, _) = GradientDescriptor::describe(None, &mut rng);

    c.bench_function("rasterize_1920x1080", |b| {
        b.iter(|| rasterize(&descriptor, 1920, 1080).unwrap());
    });
}

fn bench_resolve_palette(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (descriptor, colors) = GradientDescriptor::describe(None, &mut rng);
    let buffer = rasterize(&descriptor, 1920, 1080).unwrap();
    let zone = SafeZone::from_viewport(1920, 1080);

    c.bench_function("resolve_palette_1920x1080", |b| {
        b.iter(|| resolve_all(&buffer, &colors, &zone, &mut rng));
    });
}

criterion_group!(benches, bench_rasterize, bench_resolve_palette);
criterion_main!(benches);
