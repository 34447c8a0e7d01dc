//! End-to-end recovery pass: accumulate hull face normals, then score them.
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌─────────────┐
//! │ ConvexHull │──►│ FaceDigitizer │──►│ accumulate  │──► Accumulation
//! └────────────┘   └───────────────┘   └──────┬──────┘
//!                                              │ normals
//!                  expected normals ──────────►▼
//!                                       ┌─────────────┐
//!                                       │  deviation  │──► Deviation
//!                                       └─────────────┘
//! ```

use std::fmt;

use glam::DVec3;
use tracing::info;

use crate::accumulator::{accumulate, Accumulation};
use crate::config::RecoveryConfig;
use crate::deviation::{deviation, Deviation};
use crate::digitizer::FaceDigitizer;
use crate::error::RecoveryError;
use crate::surfel_index::SurfelLookup;
use crate::types::ConvexHull;

/// Column header matching [`RecoveryReport::summary_line`].
pub const SUMMARY_HEADER: &str = "#gridstep nbVtx min avg max stdVar";

/// Output of one recovery pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RecoveryReport<S> {
  pub accumulation: Accumulation<S>,
  pub deviation: Deviation,
}

impl<S: Copy + Ord> RecoveryReport<S> {
  /// Estimated normals, one per surfel index.
  pub fn normals(&self) -> &[DVec3] {
    &self.accumulation.normals
  }

  /// Number of surfels `N`.
  pub fn surfel_count(&self) -> usize {
    self.accumulation.len()
  }

  pub fn recovered_count(&self) -> usize {
    self.accumulation.recovered_count()
  }

  /// `gridstep N min mean max stddev`, angles in radians.
  pub fn summary_line(&self, gridstep: f64) -> String {
    let stat = &self.deviation.stat;
    format!(
      "{} {} {} {} {} {}",
      gridstep,
      self.surfel_count(),
      stat.min,
      stat.mean,
      stat.max,
      stat.stddev()
    )
  }
}

impl<S: Copy + Ord> fmt::Display for RecoveryReport<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let stat = &self.deviation.stat;
    write!(
      f,
      "{} / {} surfels recovered, {} outside; deviation min {:.6} mean {:.6} max {:.6} stddev {:.6}",
      self.recovered_count(),
      self.surfel_count(),
      self.accumulation.outside.len(),
      stat.min,
      stat.mean,
      stat.max,
      stat.stddev()
    )
  }
}

/// Accumulate normals from `hull` and compare them against `expected`.
///
/// `expected` must be index-aligned with `index`.
#[tracing::instrument(skip_all, name = "pipeline::recover")]
pub fn recover<S, D, L>(
  hull: &ConvexHull,
  digitizer: &D,
  index: &L,
  expected: &[DVec3],
  config: &RecoveryConfig,
) -> Result<RecoveryReport<S>, RecoveryError>
where
  S: Copy + Ord + Send,
  D: FaceDigitizer<S> + Sync + ?Sized,
  L: SurfelLookup<S> + ?Sized,
{
  if expected.len() != index.len() {
    return Err(RecoveryError::LengthMismatch {
      estimated: index.len(),
      expected: expected.len(),
    });
  }

  let accumulation = {
    let _span = tracing::info_span!("normal_estimation").entered();
    accumulate(hull, digitizer, index, config)?
  };
  info!(
    "{} cells / {} recovered",
    accumulation.inside.len(),
    accumulation.len()
  );
  if !accumulation.outside.is_empty() {
    info!(outside = accumulation.outside.len(), "digitized surfels beyond the surface");
  }

  let deviation = {
    let _span = tracing::info_span!("statistics").entered();
    deviation(&accumulation.normals, expected)?
  };
  info!(
    min = deviation.stat.min,
    mean = deviation.stat.mean,
    max = deviation.stat.max,
    stddev = deviation.stat.stddev(),
    "angular deviation"
  );

  Ok(RecoveryReport {
    accumulation,
    deviation,
  })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
