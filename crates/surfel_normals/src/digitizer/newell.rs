//! Polygon normal via Newell's method.

use glam::DVec3;

/// Unit normal of a planar polygon, oriented so the vertices wind
/// counter-clockwise when seen from the tip of the normal.
///
/// Returns `None` when the squared length of the area vector is at most
/// `epsilon` (collinear or repeated vertices).
///
/// Newell's method sums the cross products of consecutive vertices, which
/// stays robust when a few vertices are nearly collinear:
///
/// ```text
/// N = Σ (p_i × p_{i+1})     (= 2 × area × unit normal)
/// ```
pub fn polygon_normal(points: &[DVec3], epsilon: f64) -> Option<DVec3> {
  if points.len() < 3 {
    return None;
  }

  // Centering keeps the sum well conditioned far from the origin.
  let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;

  let mut area = DVec3::ZERO;
  for (i, p) in points.iter().enumerate() {
    let q = points[(i + 1) % points.len()];
    area += (*p - center).cross(q - center);
  }

  let len_sq = area.length_squared();
  if len_sq <= epsilon {
    return None;
  }

  Some(area * len_sq.sqrt().recip())
}
