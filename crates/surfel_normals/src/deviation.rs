//! Angular deviation between estimated and ground-truth normals.
//!
//! ```text
//! sample[i] = acos(clamp(estimated[i] · expected[i], -1, 1))     radians
//! ```
//!
//! Both arrays are treated as unit directions. A zero estimate (surfel never
//! recovered) has a zero dot product and scores π/2; it is kept in the
//! statistic rather than excluded.

use glam::DVec3;

use crate::error::RecoveryError;

/// Per-index angle between `estimated[i]` and `expected[i]`, in radians.
pub fn angle_deviation(estimated: &[DVec3], expected: &[DVec3]) -> Result<Vec<f64>, RecoveryError> {
  if estimated.len() != expected.len() {
    return Err(RecoveryError::LengthMismatch {
      estimated: estimated.len(),
      expected: expected.len(),
    });
  }

  Ok(
    estimated
      .iter()
      .zip(expected)
      .map(|(a, b)| a.dot(*b).clamp(-1.0, 1.0).acos())
      .collect(),
  )
}

/// Summary of a sample sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistic {
  pub count: usize,
  pub min: f64,
  pub max: f64,
  pub mean: f64,
  /// Population variance (divides by `count`).
  pub variance: f64,
}

impl Statistic {
  /// `None` for an empty sequence.
  pub fn from_samples(samples: &[f64]) -> Option<Self> {
    if samples.is_empty() {
      return None;
    }

    let count = samples.len();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &x in samples {
      min = min.min(x);
      max = max.max(x);
      sum += x;
    }

    // Rounding in the sum can push the mean a hair past the extremes.
    let mean = (sum / count as f64).clamp(min, max);
    let variance = samples.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / count as f64;

    Some(Self {
      count,
      min,
      max,
      mean,
      variance,
    })
  }

  /// Population standard deviation.
  pub fn stddev(&self) -> f64 {
    self.variance.sqrt()
  }

  /// Sample variance (divides by `count - 1`), 0 for a single sample.
  pub fn unbiased_variance(&self) -> f64 {
    if self.count < 2 {
      0.0
    } else {
      self.variance * self.count as f64 / (self.count - 1) as f64
    }
  }
}

/// Deviation samples and their statistic.
#[derive(Clone, Debug, PartialEq)]
pub struct Deviation {
  /// One angle per surfel index, in radians.
  pub samples: Vec<f64>,
  pub stat: Statistic,
}

impl Deviation {
  /// Samples converted to degrees.
  pub fn samples_degrees(&self) -> Vec<f64> {
    self.samples.iter().map(|x| x.to_degrees()).collect()
  }
}

/// Compare `estimated` against `expected` surfel by surfel.
///
/// Fails on a length mismatch or an empty surface.
#[tracing::instrument(skip_all, name = "deviation::deviation", fields(surfels = estimated.len()))]
pub fn deviation(estimated: &[DVec3], expected: &[DVec3]) -> Result<Deviation, RecoveryError> {
  let samples = angle_deviation(estimated, expected)?;
  let stat = Statistic::from_samples(&samples).ok_or(RecoveryError::EmptySurface)?;
  Ok(Deviation { samples, stat })
}

#[cfg(test)]
#[path = "deviation_test.rs"]
mod deviation_test;
