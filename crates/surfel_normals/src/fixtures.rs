//! Deterministic box scenes for tests, benchmarks and demos.
//!
//! A scene is a box of `dims` voxels with voxel `(0,0,0)` at the origin, its
//! boundary surfels, its 6-face convex hull, a replay digitizer and the exact
//! axis-aligned normals.
//!
//! # Hull Layout
//!
//! ```text
//! Corner index bits: ZYX (bit set = max side)
//!
//!      6 ────── 7
//!     /│       /│        Side  Axis  Face
//!    4 ────── 5 │        ────  ────  ──────────
//!    │ 2 ─────│ 3          0    -X   [0, 4, 6, 2]
//!    │/       │/           1    +X   [1, 3, 7, 5]
//!    0 ────── 1            2    -Y   [0, 1, 5, 4]
//!                          3    +Y   [2, 6, 7, 3]
//!                          4    -Z   [0, 2, 3, 1]
//!                          5    +Z   [4, 5, 7, 6]
//! ```
//!
//! Faces wind counter-clockwise seen from outside.

use std::collections::BTreeSet;

use glam::DVec3;

use crate::digitizer::TableDigitizer;
use crate::error::RecoveryError;
use crate::surfel_index::SurfelIndex;
use crate::types::{ConvexHull, HullFace, Surfel};

/// Vertex indices of each hull side, see the module table.
pub const BOX_FACES: [[usize; 4]; 6] = [
  [0, 4, 6, 2],
  [1, 3, 7, 5],
  [0, 1, 5, 4],
  [2, 6, 7, 3],
  [0, 2, 3, 1],
  [4, 5, 7, 6],
];

/// How far each hull face's recorded digitization reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxDigitization {
  /// Each face covers exactly the surfels of its own side.
  #[default]
  Exact,

  /// Each face also covers the edge surfels of the four neighbouring sides
  /// and a one-voxel ring of surfels beyond the box (absent from the
  /// surface).
  Dilated,
}

/// Everything one recovery pass consumes.
#[derive(Clone, Debug)]
pub struct Scene {
  pub dims: [i32; 3],
  pub index: SurfelIndex<Surfel>,
  pub hull: ConvexHull,
  pub digitizer: TableDigitizer<Surfel>,
  /// Ground-truth normal per surfel index.
  pub expected: Vec<DVec3>,
}

/// Box of a single voxel: 6 surfels, 6 quad faces, exact digitization.
pub fn unit_cube() -> Result<Scene, RecoveryError> {
  voxel_box([1, 1, 1], BoxDigitization::Exact)
}

/// Box of `dims` voxels.
///
/// Surfels are ordered by side (see [`BOX_FACES`]), then lexicographically by
/// the two in-plane voxel coordinates.
///
/// # Panics
///
/// If any dimension is not positive.
pub fn voxel_box(dims: [i32; 3], digitization: BoxDigitization) -> Result<Scene, RecoveryError> {
  assert!(dims.iter().all(|&d| d > 0), "box dimensions must be positive");

  let mut surfels = Vec::new();
  let mut expected = Vec::new();
  for side in 0..6 {
    let (axis, positive) = side_axis(side);
    for voxel in side_voxels(dims, side, 0) {
      surfels.push(Surfel::between(voxel, axis, positive));
      expected.push(side_normal(side));
    }
  }

  let digitizations: Vec<BTreeSet<Surfel>> = (0..6)
    .map(|side| match digitization {
      BoxDigitization::Exact => side_surfels(dims, side, 0),
      BoxDigitization::Dilated => dilated_surfels(dims, side),
    })
    .collect();

  Ok(Scene {
    dims,
    index: SurfelIndex::new(surfels)?,
    hull: box_hull(dims),
    digitizer: TableDigitizer::new(digitizations),
    expected,
  })
}

/// Axis and direction of hull side `side`.
#[inline]
pub fn side_axis(side: usize) -> (usize, bool) {
  (side / 2, side % 2 == 1)
}

/// Outward unit normal of hull side `side`.
pub fn side_normal(side: usize) -> DVec3 {
  let (axis, positive) = side_axis(side);
  let mut n = DVec3::ZERO;
  n[axis] = if positive { 1.0 } else { -1.0 };
  n
}

fn box_hull(dims: [i32; 3]) -> ConvexHull {
  let vertices = (0..8)
    .map(|corner| {
      let mut p = DVec3::splat(-0.5);
      for axis in 0..3 {
        if corner & (1 << axis) != 0 {
          p[axis] = dims[axis] as f64 - 0.5;
        }
      }
      p
    })
    .collect();

  let faces = BOX_FACES
    .iter()
    .map(|face| face.iter().copied().collect::<HullFace>())
    .collect();

  ConvexHull::new(vertices, faces)
}

/// Boundary-layer voxels of side `side`, with the in-plane range grown by
/// `margin` on both ends.
fn side_voxels(dims: [i32; 3], side: usize, margin: i32) -> Vec<[i32; 3]> {
  let (axis, positive) = side_axis(side);
  let (u, v) = in_plane_axes(axis);
  let layer = if positive { dims[axis] - 1 } else { 0 };

  let mut voxels = Vec::new();
  for a in -margin..dims[u] + margin {
    for b in -margin..dims[v] + margin {
      let mut voxel = [0; 3];
      voxel[axis] = layer;
      voxel[u] = a;
      voxel[v] = b;
      voxels.push(voxel);
    }
  }
  voxels
}

fn side_surfels(dims: [i32; 3], side: usize, margin: i32) -> BTreeSet<Surfel> {
  let (axis, positive) = side_axis(side);
  side_voxels(dims, side, margin)
    .into_iter()
    .map(|voxel| Surfel::between(voxel, axis, positive))
    .collect()
}

fn dilated_surfels(dims: [i32; 3], side: usize) -> BTreeSet<Surfel> {
  let (axis, _) = side_axis(side);
  let (u, v) = in_plane_axes(axis);
  let mut surfels = side_surfels(dims, side, 1);

  // Edge surfels of the neighbouring sides along this side's rim.
  for voxel in side_voxels(dims, side, 0) {
    for w in [u, v] {
      if voxel[w] == 0 {
        surfels.insert(Surfel::between(voxel, w, false));
      }
      if voxel[w] == dims[w] - 1 {
        surfels.insert(Surfel::between(voxel, w, true));
      }
    }
  }

  surfels
}

#[inline]
fn in_plane_axes(axis: usize) -> (usize, usize) {
  ((axis + 1) % 3, (axis + 2) % 3)
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;
