//! Benchmark comparing sequential and parallel accumulation over box scenes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use surfel_normals::fixtures::{voxel_box, BoxDigitization, Scene};
use surfel_normals::{accumulate, deviation, AccumulationMode, RecoveryConfig};

/// Box edge lengths (voxels) to benchmark.
const SIZES: [i32; 3] = [16, 32, 64];

fn scene(size: i32) -> Scene {
  match voxel_box([size, size, size], BoxDigitization::Dilated) {
    Ok(scene) => scene,
    Err(err) => panic!("box scene: {err}"),
  }
}

/// Benchmark accumulation in both modes.
fn bench_accumulate(c: &mut Criterion) {
  let mut group = c.benchmark_group("accumulate");

  for size in SIZES {
    let scene = scene(size);

    for (name, mode) in [
      ("sequential", AccumulationMode::Sequential),
      ("parallel", AccumulationMode::Parallel),
    ] {
      let config = RecoveryConfig::new().with_mode(mode);
      group.bench_with_input(BenchmarkId::new(name, size), &scene, |b, scene| {
        b.iter(|| {
          accumulate(
            black_box(&scene.hull),
            &scene.digitizer,
            &scene.index,
            &config,
          )
        })
      });
    }
  }

  group.finish();
}

/// Benchmark deviation statistics on recovered normals.
fn bench_deviation(c: &mut Criterion) {
  let mut group = c.benchmark_group("deviation");

  for size in SIZES {
    let scene = scene(size);
    let normals = match accumulate(&scene.hull, &scene.digitizer, &scene.index, &RecoveryConfig::new()) {
      Ok(acc) => acc.normals,
      Err(err) => panic!("accumulate: {err}"),
    };

    group.bench_with_input(BenchmarkId::from_parameter(size), &normals, |b, normals| {
      b.iter(|| deviation(black_box(normals), &scene.expected))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_accumulate, bench_deviation);
criterion_main!(benches);
