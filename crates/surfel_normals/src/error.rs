//! Error type for the recovery pass.

use thiserror::Error;

/// Contract breaches by an upstream collaborator.
///
/// A digitized surfel missing from the surfel index is not an error; it is
/// routed into the outside set.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecoveryError {
  #[error("hull face {face} has {count} vertices, at least 3 are required")]
  TooFewVertices { face: usize, count: usize },

  #[error("hull face {face} references vertex {vertex}, the hull has {len} vertices")]
  VertexOutOfRange { face: usize, vertex: usize, len: usize },

  #[error("hull face {face} does not exist, the hull has {len} faces")]
  FaceOutOfRange { face: usize, len: usize },

  #[error("hull face {face} is degenerate (collinear or repeated vertices)")]
  DegenerateFace { face: usize },

  #[error("surfel at position {index} duplicates the surfel at position {first}")]
  DuplicateSurfel { index: usize, first: usize },

  #[error("surfel lookup returned index {index}, the surface has {len} surfels")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("estimated normals ({estimated}) and expected normals ({expected}) differ in length")]
  LengthMismatch { estimated: usize, expected: usize },

  #[error("digital surface has no surfels")]
  EmptySurface,

  #[error("digitizer failed on hull face {face}: {reason}")]
  Digitizer { face: usize, reason: String },
}

impl RecoveryError {
  pub fn digitizer(face: usize, reason: impl Into<String>) -> Self {
    RecoveryError::Digitizer {
      face,
      reason: reason.into(),
    }
  }
}
