use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{thread_rng, Rng};

use glam::DVec3;
use octsphere::prelude::*;

fn random_boundary(size: f64) -> Boundary {
    let mut rng = thread_rng();
    let mut gen = |range| rng.gen_range(range);

    Boundary::new(DVec3::new(gen(-100.0..100.0), gen(-100.0..100.0), gen(-100.0..100.0)), size)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Octsphere");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(20);

    for size in (1..=6).map(|i| 2_f64.powi(i)) {
        let boundary = random_boundary(size);

        #[cfg(feature = "parallel")]
        {
            group.bench_with_input(
                BenchmarkId::new("parallel::DepthFirst", size),
                &boundary,
                |b, input| {
                    b.iter(|| {
                        let mut octree = Octree::new(*input).unwrap();
                        octree.subdivide_with(&parallel::DepthFirst);
                        octree
                    })
                },
            );
        }

        {
            group.bench_with_input(
                BenchmarkId::new("sequential::DepthFirst", size),
                &boundary,
                |b, input| b.iter(|| Octree::build(*input).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
