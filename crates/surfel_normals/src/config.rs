//! Configuration for the recovery pass.

/// Squared area-vector length below which a hull face counts as degenerate.
pub const DEFAULT_DEGENERATE_EPSILON: f64 = 1e-12;

/// How hull faces are digitized during accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccumulationMode {
  /// Digitize and accumulate one face at a time.
  #[default]
  Sequential,

  /// Digitize all faces on the rayon pool, then accumulate in face order.
  /// Produces bit-identical results to `Sequential`.
  Parallel,
}

/// Configuration for [`crate::accumulator::accumulate`] and
/// [`crate::pipeline::recover`].
#[derive(Clone, Debug)]
pub struct RecoveryConfig {
  /// Execution mode.
  pub mode: AccumulationMode,

  /// Degenerate face threshold, see [`DEFAULT_DEGENERATE_EPSILON`].
  pub degenerate_epsilon: f64,
}

impl Default for RecoveryConfig {
  fn default() -> Self {
    Self {
      mode: AccumulationMode::default(),
      degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
    }
  }
}

impl RecoveryConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_mode(mut self, mode: AccumulationMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
    self.degenerate_epsilon = epsilon;
    self
  }

  /// Shorthand for `with_mode(Parallel)` / `with_mode(Sequential)`.
  pub fn with_parallel(self, parallel: bool) -> Self {
    self.with_mode(if parallel {
      AccumulationMode::Parallel
    } else {
      AccumulationMode::Sequential
    })
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
