// Criterion's builder methods return &mut Self for chaining.
#![allow(unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gimbal::animation::OrbitAnimator;
use gimbal::arm::{JointChain, Link};
use gimbal::engine::{Material, ShadeMode};
use gimbal::options::OrbitOptions;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn orbit_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_advance");

    for count in [10usize, 100, 1000] {
        let opts = OrbitOptions {
            body_count: count,
            ..OrbitOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut animator = OrbitAnimator::with_rng(&opts, &mut rng);

        group.bench_function(format!("{count}_bodies"), |b| {
            b.iter(|| animator.advance(black_box(1.0 / 60.0)))
        });
    }

    group.finish();
}

fn chain_fk_benchmark(c: &mut Criterion) {
    let two_link = JointChain::new(
        Vec2::ZERO,
        vec![
            Link {
                angle: 40.0,
                length: 0.3,
            },
            Link {
                angle: -40.0,
                length: 0.2,
            },
        ],
    );
    c.bench_function("two_link_fk", |b| {
        b.iter(|| black_box(&two_link).end_effector_position())
    });

    let ten_link = JointChain::new(
        Vec2::ZERO,
        (0..10)
            .map(|i| Link {
                angle: (i * 13) as f32,
                length: 0.5,
            })
            .collect(),
    );
    c.bench_function("ten_link_fk", |b| {
        b.iter(|| black_box(&ten_link).end_effector_position())
    });
}

fn uniform_pack_benchmark(c: &mut Criterion) {
    let lit = ShadeMode::Lit(Material::default());
    let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let view_proj = Mat4::perspective_rh(0.8, 1.6, 0.1, 100.0);

    c.bench_function("lit_uniform_pack", |b| {
        b.iter(|| {
            black_box(lit.pack(
                black_box(model),
                black_box(view_proj),
                Vec3::ONE,
            ))
        })
    });
}

criterion_group!(
    benches,
    orbit_advance_benchmark,
    chain_fk_benchmark,
    uniform_pack_benchmark
);
criterion_main!(benches);
