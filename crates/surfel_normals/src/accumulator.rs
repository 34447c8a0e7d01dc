//! Normal accumulation from digitized hull faces.
//!
//! Every hull face is digitized into a surfel set; each face normal is then
//! folded into the normal of every surfel of the set that belongs to the
//! surface.
//!
//! # Running Renormalization
//!
//! ```text
//! normals[i] := normalize(normals[i] + n_f)     for each face f, in order
//! ```
//!
//! The entry is renormalized after every contribution, so with three or more
//! faces on one surfel the result depends on face order:
//!
//! ```text
//! faces (1,0,0) then (0,1,0):
//!   after f0: (1, 0, 0)
//!   after f1: normalize((1,0,0) + (0,1,0)) = (0.7071, 0.7071, 0)
//!
//! faces (1,0,0), (1,0,0), then (0,1,0):
//!   running: normalize((1,0,0) + (0,1,0)) = (0.7071, 0.7071, 0)
//!   batch:   normalize((2,1,0))            = (0.8944, 0.4472, 0)
//! ```
//!
//! # Partition
//!
//! ```text
//! digitized surfel s ──► index.find(s) ──┬─ Some(i) ──► inside,  normals[i] updated
//!                                        └─ None    ──► outside, no normal touched
//! ```
//!
//! Surfels of the surface never reached by any face keep the zero vector and
//! a contribution count of 0.

use std::collections::BTreeSet;

use glam::DVec3;
use rayon::prelude::*;
use tracing::{debug, trace};
use web_time::Instant;

use crate::config::{AccumulationMode, RecoveryConfig};
use crate::digitizer::{polygon_normal, DigitizedFace, FaceDigitizer};
use crate::error::RecoveryError;
use crate::metrics::PassMetrics;
use crate::surfel_index::SurfelLookup;
use crate::types::ConvexHull;

/// Per-surfel normals and the inside/outside partition of one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulation<S> {
  /// One entry per surfel index: unit length, or zero if never touched.
  pub normals: Vec<DVec3>,

  /// Number of faces that contributed to each surfel.
  pub contributions: Vec<u32>,

  /// Digitized surfels present in the surfel index.
  pub inside: BTreeSet<S>,

  /// Digitized surfels absent from the surfel index.
  pub outside: BTreeSet<S>,

  pub metrics: PassMetrics,
}

impl<S: Copy + Ord> Accumulation<S> {
  /// Empty accumulation over `len` surfels.
  pub fn new(len: usize) -> Self {
    Self {
      normals: vec![DVec3::ZERO; len],
      contributions: vec![0; len],
      inside: BTreeSet::new(),
      outside: BTreeSet::new(),
      metrics: PassMetrics::new(),
    }
  }

  /// Fold one digitized face into the normals.
  pub fn add_face<L>(&mut self, face: &DigitizedFace<S>, index: &L) -> Result<(), RecoveryError>
  where
    L: SurfelLookup<S> + ?Sized,
  {
    self.metrics.faces += 1;

    for surfel in &face.surfels {
      match index.find(surfel) {
        Some(i) => {
          let len = self.normals.len();
          let normal = self
            .normals
            .get_mut(i)
            .ok_or(RecoveryError::IndexOutOfRange { index: i, len })?;
          *normal = (*normal + face.normal).normalize_or_zero();
          self.contributions[i] += 1;
          self.inside.insert(*surfel);
          self.metrics.record_probe(true);
        }
        None => {
          self.outside.insert(*surfel);
          self.metrics.record_probe(false);
        }
      }
    }

    Ok(())
  }

  /// Number of surfels `N`.
  pub fn len(&self) -> usize {
    self.normals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.normals.is_empty()
  }

  /// Whether surfel `index` received at least one face normal.
  #[inline]
  pub fn is_recovered(&self, index: usize) -> bool {
    self.contributions.get(index).is_some_and(|&c| c > 0)
  }

  /// Recovered flag per surfel index.
  pub fn recovered_mask(&self) -> Vec<bool> {
    self.contributions.iter().map(|&c| c > 0).collect()
  }

  /// Number of recovered surfels (`|inside|`).
  pub fn recovered_count(&self) -> usize {
    self.contributions.iter().filter(|&&c| c > 0).count()
  }

  /// Surfels of the surface no face reached.
  pub fn untouched_count(&self) -> usize {
    self.len() - self.recovered_count()
  }
}

/// Resolve face `face`, reject degenerate polygons, and digitize it.
fn digitize_face<S, D>(
  hull: &ConvexHull,
  digitizer: &D,
  face: usize,
  epsilon: f64,
) -> Result<DigitizedFace<S>, RecoveryError>
where
  D: FaceDigitizer<S> + ?Sized,
{
  let polygon = hull.polygon(face)?;
  if polygon_normal(&polygon.points, epsilon).is_none() {
    return Err(RecoveryError::DegenerateFace { face });
  }

  let digitized = digitizer.digitize(&polygon)?;
  trace!(face, surfels = digitized.surfels.len(), "digitized face");
  Ok(digitized)
}

/// Accumulate the normals of every hull face onto the surfels it covers.
///
/// Faces are folded in hull order in both modes; `Parallel` only moves the
/// digitization onto the rayon pool. The first failing face (in hull order)
/// aborts the pass.
#[tracing::instrument(
  skip_all,
  name = "accumulator::accumulate",
  fields(faces = hull.face_count(), surfels = index.len())
)]
pub fn accumulate<S, D, L>(
  hull: &ConvexHull,
  digitizer: &D,
  index: &L,
  config: &RecoveryConfig,
) -> Result<Accumulation<S>, RecoveryError>
where
  S: Copy + Ord + Send,
  D: FaceDigitizer<S> + Sync + ?Sized,
  L: SurfelLookup<S> + ?Sized,
{
  let mut accumulation = Accumulation::new(index.len());
  let epsilon = config.degenerate_epsilon;

  match config.mode {
    AccumulationMode::Sequential => {
      for face in 0..hull.face_count() {
        let start = Instant::now();
        let digitized = digitize_face(hull, digitizer, face, epsilon)?;
        accumulation.metrics.digitize_us += start.elapsed().as_micros() as u64;

        let start = Instant::now();
        accumulation.add_face(&digitized, index)?;
        accumulation.metrics.accumulate_us += start.elapsed().as_micros() as u64;
      }
    }
    AccumulationMode::Parallel => {
      let start = Instant::now();
      let digitized: Vec<Result<DigitizedFace<S>, RecoveryError>> = (0..hull.face_count())
        .into_par_iter()
        .map(|face| digitize_face(hull, digitizer, face, epsilon))
        .collect();
      accumulation.metrics.digitize_us += start.elapsed().as_micros() as u64;

      let start = Instant::now();
      for face in digitized {
        accumulation.add_face(&face?, index)?;
      }
      accumulation.metrics.accumulate_us += start.elapsed().as_micros() as u64;
    }
  }

  debug!(
    inside = accumulation.inside.len(),
    outside = accumulation.outside.len(),
    probes = accumulation.metrics.probes,
    "accumulation finished"
  );

  Ok(accumulation)
}

#[cfg(test)]
#[path = "accumulator_test.rs"]
mod accumulator_test;
