use smallvec::smallvec;

use super::*;
use crate::types::Surfel;

fn unit_square(face: usize) -> HullPolygon {
  HullPolygon {
    face,
    points: smallvec![
      DVec3::new(0.0, 0.0, 0.0),
      DVec3::new(1.0, 0.0, 0.0),
      DVec3::new(1.0, 1.0, 0.0),
      DVec3::new(0.0, 1.0, 0.0),
    ],
  }
}

fn approx_eq(a: DVec3, b: DVec3, epsilon: f64) -> bool {
  (a - b).abs().max_element() < epsilon
}

#[test]
fn test_newell_follows_winding() {
  let ccw = unit_square(0);
  let n = polygon_normal(&ccw.points, 1e-12).unwrap();
  assert!(approx_eq(n, DVec3::Z, 1e-12));

  let mut cw = ccw.points.clone();
  cw.reverse();
  let n = polygon_normal(&cw, 1e-12).unwrap();
  assert!(approx_eq(n, -DVec3::Z, 1e-12));
}

#[test]
fn test_newell_tilted_triangle() {
  let points = [DVec3::X, DVec3::Y, DVec3::Z];
  let n = polygon_normal(&points, 1e-12).unwrap();
  let expected = DVec3::ONE.normalize();
  assert!(approx_eq(n, expected, 1e-12));
  assert!((n.length() - 1.0).abs() < 1e-12);
}

#[test]
fn test_newell_far_from_origin() {
  let offset = DVec3::splat(1.0e6);
  let points: Vec<DVec3> = unit_square(0).points.iter().map(|p| *p + offset).collect();
  let n = polygon_normal(&points, 1e-12).unwrap();
  assert!(approx_eq(n, DVec3::Z, 1e-9));
}

#[test]
fn test_newell_degenerate() {
  let collinear = [DVec3::ZERO, DVec3::X, DVec3::X * 2.0];
  assert_eq!(polygon_normal(&collinear, 1e-12), None);

  let repeated = [DVec3::ONE, DVec3::ONE, DVec3::ONE];
  assert_eq!(polygon_normal(&repeated, 1e-12), None);

  assert_eq!(polygon_normal(&[DVec3::ZERO, DVec3::X], 1e-12), None);
}

#[test]
fn test_table_replays_face_sets() {
  let a = Surfel::between([0, 0, 0], 2, false);
  let b = Surfel::between([1, 0, 0], 2, false);
  let table = TableDigitizer::new(vec![vec![b, a], vec![]]);

  assert_eq!(table.len(), 2);

  let digitized = table.digitize(&unit_square(0)).unwrap();
  assert!(approx_eq(digitized.normal, DVec3::Z, 1e-12));
  assert_eq!(digitized.surfels.into_iter().collect::<Vec<_>>(), vec![a, b]);

  let empty = table.digitize(&unit_square(1)).unwrap();
  assert!(empty.surfels.is_empty());
}

#[test]
fn test_table_missing_face_is_error() {
  let table = TableDigitizer::<Surfel>::new(Vec::<Vec<Surfel>>::new());
  assert!(table.is_empty());

  let err = table.digitize(&unit_square(3)).unwrap_err();
  assert!(matches!(err, RecoveryError::Digitizer { face: 3, .. }));
}

#[test]
fn test_table_degenerate_polygon() {
  let table = TableDigitizer::new(vec![Vec::<Surfel>::new()]);
  let polygon = HullPolygon {
    face: 0,
    points: smallvec![DVec3::ZERO, DVec3::X, DVec3::X * 3.0],
  };
  assert_eq!(
    table.digitize(&polygon),
    Err(RecoveryError::DegenerateFace { face: 0 })
  );
}

#[test]
fn test_closure_digitizer() {
  let s = Surfel::between([0, 0, 0], 0, true);
  let digitizer = |_: &HullPolygon| -> Result<DigitizedFace<Surfel>, RecoveryError> {
    Ok(DigitizedFace::new(DVec3::X, [s]))
  };

  let digitized = FaceDigitizer::<Surfel>::digitize(&digitizer, &unit_square(0)).unwrap();
  assert_eq!(digitized.normal, DVec3::X);
  assert!(digitized.surfels.contains(&s));
}
