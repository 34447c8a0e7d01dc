//! Per-face polygon digitization contract.
//!
//! A digitizer rasterizes one convex planar hull face into the set of surfels
//! whose cells the face intersects, and reports the face's unit normal. The
//! rasterization itself lives outside this crate; [`TableDigitizer`] replays
//! sets recorded by an external digitizer.
//!
//! ```text
//! HullPolygon ──► FaceDigitizer ──► DigitizedFace { normal, surfels }
//! ```

mod newell;
mod table;

pub use newell::polygon_normal;
pub use table::TableDigitizer;

use std::collections::BTreeSet;

use glam::DVec3;

use crate::error::RecoveryError;
use crate::types::HullPolygon;

/// Result of digitizing one hull face.
#[derive(Clone, Debug, PartialEq)]
pub struct DigitizedFace<S> {
  /// Unit normal of the supporting plane, oriented by vertex winding.
  pub normal: DVec3,

  /// Surfels whose cells intersect the face.
  pub surfels: BTreeSet<S>,
}

impl<S: Ord> DigitizedFace<S> {
  pub fn new(normal: DVec3, surfels: impl IntoIterator<Item = S>) -> Self {
    Self {
      normal,
      surfels: surfels.into_iter().collect(),
    }
  }
}

/// Rasterizes a convex planar polygon into a normal and a surfel set.
///
/// Callers never pass polygons with fewer than 3 non-collinear vertices.
pub trait FaceDigitizer<S> {
  fn digitize(&self, polygon: &HullPolygon) -> Result<DigitizedFace<S>, RecoveryError>;
}

impl<S, F> FaceDigitizer<S> for F
where
  F: Fn(&HullPolygon) -> Result<DigitizedFace<S>, RecoveryError>,
{
  #[inline]
  fn digitize(&self, polygon: &HullPolygon) -> Result<DigitizedFace<S>, RecoveryError> {
    self(polygon)
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
