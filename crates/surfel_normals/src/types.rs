//! Core data types: surfel identities and convex hull geometry.
//!
//! # Khalimsky Coordinates
//!
//! ```text
//! Cell kind      Even coordinates   Example
//! ─────────      ────────────────   ─────────
//! Pointel        3                  (0, 2, 4)
//! Linel          2                  (1, 2, 4)
//! Surfel         1                  (1, 3, 4)
//! Voxel          0                  (1, 3, 5)
//! ```
//!
//! Voxel `(x, y, z)` has Khalimsky coordinates `(2x+1, 2y+1, 2z+1)`. A surfel
//! separates two voxels; its single even coordinate names the axis it is
//! orthogonal to.
//!
//! # Digital Embedding
//!
//! ```text
//! real = k / 2 - 1/2
//!
//!   k:     0     1     2     3     4
//!          │     │     │     │     │
//!   real: -0.5   0    0.5    1    1.5
//!          └─ pointel   └─ pointel
//!                voxel centre ─┘
//! ```

use glam::DVec3;
use smallvec::SmallVec;

use crate::error::RecoveryError;

/// Unoriented surfel identity in Khalimsky coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Surfel {
  pub kcoords: [i32; 3],
}

impl Surfel {
  pub const fn from_khalimsky(kcoords: [i32; 3]) -> Self {
    Self { kcoords }
  }

  /// The surfel separating `voxel` from its neighbour along `axis`.
  ///
  /// `positive` selects the neighbour at `voxel[axis] + 1`.
  pub fn between(voxel: [i32; 3], axis: usize, positive: bool) -> Self {
    let mut kcoords = [2 * voxel[0] + 1, 2 * voxel[1] + 1, 2 * voxel[2] + 1];
    kcoords[axis] += if positive { 1 } else { -1 };
    Self { kcoords }
  }

  /// Axis the surfel is orthogonal to, or `None` if this is not a surfel.
  pub fn orth_dir(&self) -> Option<usize> {
    if !self.is_valid() {
      return None;
    }
    self.kcoords.iter().position(|k| k % 2 == 0)
  }

  /// Exactly one even coordinate.
  pub fn is_valid(&self) -> bool {
    self.kcoords.iter().filter(|k| *k % 2 == 0).count() == 1
  }

  /// Centre of the surfel in digital space.
  #[inline]
  pub fn centroid(&self) -> DVec3 {
    DVec3::new(
      self.kcoords[0] as f64,
      self.kcoords[1] as f64,
      self.kcoords[2] as f64,
    ) * 0.5
      - DVec3::splat(0.5)
  }
}

/// Vertex indices of one hull face, in winding order.
pub type HullFace = SmallVec<[usize; 6]>;

/// A hull face resolved to points.
#[derive(Clone, Debug, PartialEq)]
pub struct HullPolygon {
  /// Position of the face in the hull's face list.
  pub face: usize,
  pub points: SmallVec<[DVec3; 8]>,
}

/// Convex polyhedron approximating the digital surface.
///
/// Faces are assumed planar and convex; only vertex count and index range are
/// checked when a face is resolved.
#[derive(Clone, Debug, Default)]
pub struct ConvexHull {
  pub vertices: Vec<DVec3>,
  pub faces: Vec<HullFace>,
}

impl ConvexHull {
  pub fn new(vertices: Vec<DVec3>, faces: Vec<HullFace>) -> Self {
    Self { vertices, faces }
  }

  pub fn face_count(&self) -> usize {
    self.faces.len()
  }

  /// Resolve the vertex indices of face `face` to points.
  pub fn polygon(&self, face: usize) -> Result<HullPolygon, RecoveryError> {
    let indices = self.faces.get(face).ok_or(RecoveryError::FaceOutOfRange {
      face,
      len: self.faces.len(),
    })?;

    if indices.len() < 3 {
      return Err(RecoveryError::TooFewVertices {
        face,
        count: indices.len(),
      });
    }

    let mut points = SmallVec::with_capacity(indices.len());
    for &vertex in indices {
      let point = self
        .vertices
        .get(vertex)
        .ok_or(RecoveryError::VertexOutOfRange {
          face,
          vertex,
          len: self.vertices.len(),
        })?;
      points.push(*point);
    }

    Ok(HullPolygon { face, points })
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
