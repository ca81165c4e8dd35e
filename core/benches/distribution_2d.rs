use criterion::{black_box, criterion_group, criterion_main, Criterion};
use distrib2d::geometry::Point2f;
use distrib2d::sampling::Distribution2D;

use rand::{rngs::StdRng, Rng, SeedableRng};

const WIDTH: usize = 1024;
const HEIGHT: usize = 512;

fn weights() -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..WIDTH * HEIGHT).map(|_| rng.gen::<f32>()).collect()
}

fn distribution_2d_build(c: &mut Criterion) {
    let weights = weights();
    c.bench_function("distribution_2d_build", |b| {
        b.iter(|| Distribution2D::new(black_box(weights.clone()), WIDTH, HEIGHT))
    });
}

fn distribution_2d_warp(c: &mut Criterion) {
    let dist = Distribution2D::new(weights(), WIDTH, HEIGHT).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("distribution_2d_warp", |b| {
        b.iter(|| dist.warp(&Point2f::new(rng.gen(), rng.gen())))
    });
}

criterion_group!(benches, distribution_2d_build, distribution_2d_warp);
criterion_main!(benches);
