//! Surfel identity to dense index association.
//!
//! The index is built once from the surface's surfel sequence and never
//! mutated. Surfel `surfels[i]` maps to `i`, so the map is a bijection over
//! `0..N`.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::RecoveryError;

/// Lookup from surfel identity to its index in per-surfel attribute arrays.
///
/// A miss means the surfel is not part of the surface.
pub trait SurfelLookup<S> {
  fn find(&self, surfel: &S) -> Option<usize>;

  /// Number of surfels `N`.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Arena of surfels plus a hash index into it.
#[derive(Clone, Debug)]
pub struct SurfelIndex<S> {
  surfels: Vec<S>,
  lookup: HashMap<S, usize>,
}

impl<S: Copy + Eq + Hash> SurfelIndex<S> {
  /// Assign dense indices in sequence order.
  ///
  /// Fails if a surfel appears twice.
  pub fn new(surfels: Vec<S>) -> Result<Self, RecoveryError> {
    let mut lookup = HashMap::with_capacity(surfels.len());
    for (index, surfel) in surfels.iter().enumerate() {
      if let Some(first) = lookup.insert(*surfel, index) {
        return Err(RecoveryError::DuplicateSurfel { index, first });
      }
    }
    Ok(Self { surfels, lookup })
  }

  pub fn surfel(&self, index: usize) -> Option<&S> {
    self.surfels.get(index)
  }

  pub fn surfels(&self) -> &[S] {
    &self.surfels
  }

  /// `(index, surfel)` pairs in index order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &S)> {
    self.surfels.iter().enumerate()
  }
}

impl<S: Copy + Eq + Hash> SurfelLookup<S> for SurfelIndex<S> {
  #[inline]
  fn find(&self, surfel: &S) -> Option<usize> {
    self.lookup.get(surfel).copied()
  }

  fn len(&self) -> usize {
    self.surfels.len()
  }
}

impl<S: Eq + Hash> SurfelLookup<S> for HashMap<S, usize> {
  #[inline]
  fn find(&self, surfel: &S) -> Option<usize> {
    self.get(surfel).copied()
  }

  fn len(&self) -> usize {
    HashMap::len(self)
  }
}

impl<S: Ord> SurfelLookup<S> for BTreeMap<S, usize> {
  #[inline]
  fn find(&self, surfel: &S) -> Option<usize> {
    self.get(surfel).copied()
  }

  fn len(&self) -> usize {
    BTreeMap::len(self)
  }
}

#[cfg(test)]
#[path = "surfel_index_test.rs"]
mod surfel_index_test;
