//! Digitizer replaying externally recorded surfel sets.

use std::collections::BTreeSet;

use crate::config::DEFAULT_DEGENERATE_EPSILON;
use crate::error::RecoveryError;
use crate::types::HullPolygon;

use super::{polygon_normal, DigitizedFace, FaceDigitizer};

/// Replays one recorded surfel set per hull face, in face order.
///
/// The normal is recomputed from the polygon with [`polygon_normal`].
#[derive(Clone, Debug)]
pub struct TableDigitizer<S> {
  faces: Vec<BTreeSet<S>>,
  epsilon: f64,
}

impl<S: Ord + Clone> TableDigitizer<S> {
  pub fn new<I, F>(faces: I) -> Self
  where
    I: IntoIterator<Item = F>,
    F: IntoIterator<Item = S>,
  {
    Self {
      faces: faces
        .into_iter()
        .map(|surfels| surfels.into_iter().collect())
        .collect(),
      epsilon: DEFAULT_DEGENERATE_EPSILON,
    }
  }

  pub fn with_epsilon(mut self, epsilon: f64) -> Self {
    self.epsilon = epsilon;
    self
  }

  /// Number of recorded faces.
  pub fn len(&self) -> usize {
    self.faces.len()
  }

  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }
}

impl<S: Ord + Clone> FaceDigitizer<S> for TableDigitizer<S> {
  fn digitize(&self, polygon: &HullPolygon) -> Result<DigitizedFace<S>, RecoveryError> {
    let surfels = self.faces.get(polygon.face).ok_or_else(|| {
      RecoveryError::digitizer(
        polygon.face,
        format!("no recorded digitization ({} faces recorded)", self.faces.len()),
      )
    })?;

    let normal = polygon_normal(&polygon.points, self.epsilon)
      .ok_or(RecoveryError::DegenerateFace { face: polygon.face })?;

    Ok(DigitizedFace {
      normal,
      surfels: surfels.clone(),
    })
  }
}
