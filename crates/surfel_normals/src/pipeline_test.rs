use super::*;
use crate::config::AccumulationMode;
use crate::fixtures::{unit_cube, voxel_box, BoxDigitization};
use crate::types::Surfel;

#[test]
fn test_unit_cube_report() {
  let scene = unit_cube().unwrap();
  let report = recover(
    &scene.hull,
    &scene.digitizer,
    &scene.index,
    &scene.expected,
    &RecoveryConfig::default(),
  )
  .unwrap();

  assert_eq!(report.surfel_count(), 6);
  assert_eq!(report.recovered_count(), 6);
  assert!(report.accumulation.outside.is_empty());

  let stat = report.deviation.stat;
  assert!(stat.min.abs() < 1e-9);
  assert!(stat.mean.abs() < 1e-9);
  assert!(stat.max.abs() < 1e-9);
  assert!(stat.stddev().abs() < 1e-9);
}

#[test]
fn test_summary_line_columns() {
  let scene = unit_cube().unwrap();
  let report = recover(
    &scene.hull,
    &scene.digitizer,
    &scene.index,
    &scene.expected,
    &RecoveryConfig::default(),
  )
  .unwrap();

  let line = report.summary_line(0.5);
  let columns: Vec<&str> = line.split_whitespace().collect();
  assert_eq!(columns.len(), SUMMARY_HEADER.split_whitespace().count());
  assert_eq!(columns[0], "0.5");
  assert_eq!(columns[1], "6");
  assert!(report.to_string().starts_with("6 / 6 surfels recovered, 0 outside"));
}

#[test]
fn test_dilated_box_has_edge_error() {
  let scene = voxel_box([4, 4, 4], BoxDigitization::Dilated).unwrap();
  let report = recover(
    &scene.hull,
    &scene.digitizer,
    &scene.index,
    &scene.expected,
    &RecoveryConfig::new().with_mode(AccumulationMode::Parallel),
  )
  .unwrap();

  let stat = report.deviation.stat;
  assert_eq!(report.recovered_count(), report.surfel_count());
  assert!(!report.accumulation.outside.is_empty());
  // Interior surfels of each side stay exact, rim surfels tilt.
  assert_eq!(stat.min, 0.0);
  assert!(stat.max > 0.1);
  assert!(stat.min <= stat.mean && stat.mean <= stat.max);
}

#[test]
fn test_missing_faces_penalize_deviation() {
  let scene = voxel_box([2, 2, 2], BoxDigitization::Exact).unwrap();
  let mut hull = scene.hull.clone();
  hull.faces.truncate(5); // drop +Z

  let report = recover(&hull, &scene.digitizer, &scene.index, &scene.expected, &RecoveryConfig::default())
    .unwrap();

  assert_eq!(report.recovered_count(), 20);
  assert_eq!(report.deviation.samples.len(), 24);
  let penalized = report
    .deviation
    .samples
    .iter()
    .filter(|&&x| (x - std::f64::consts::FRAC_PI_2).abs() < 1e-12)
    .count();
  assert_eq!(penalized, 4);
}

#[test]
fn test_expected_length_mismatch() {
  let scene = unit_cube().unwrap();
  let err = recover::<Surfel, _, _>(
    &scene.hull,
    &scene.digitizer,
    &scene.index,
    &scene.expected[..5],
    &RecoveryConfig::default(),
  )
  .unwrap_err();

  assert_eq!(
    err,
    RecoveryError::LengthMismatch {
      estimated: 6,
      expected: 5
    }
  );
}
