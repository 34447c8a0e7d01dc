//! Counters and timings for one accumulation pass.

/// Statistics gathered while accumulating hull faces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
  /// Hull faces digitized.
  pub faces: usize,
  /// Surfels returned by the digitizer across all faces.
  pub probes: u64,
  /// Probes found in the surfel index.
  pub hits: u64,
  /// Probes absent from the surfel index.
  pub misses: u64,
  /// Wall time spent digitizing faces, in microseconds.
  pub digitize_us: u64,
  /// Wall time spent folding face normals into surfels, in microseconds.
  pub accumulate_us: u64,
}

impl PassMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one index probe.
  #[inline]
  pub fn record_probe(&mut self, hit: bool) {
    self.probes += 1;
    if hit {
      self.hits += 1;
    } else {
      self.misses += 1;
    }
  }

  /// Fraction of probes that missed the surface, 0 when nothing was probed.
  pub fn miss_ratio(&self) -> f64 {
    if self.probes == 0 {
      0.0
    } else {
      self.misses as f64 / self.probes as f64
    }
  }

  /// Average surfels per digitized face.
  pub fn probes_per_face(&self) -> f64 {
    if self.faces == 0 {
      0.0
    } else {
      self.probes as f64 / self.faces as f64
    }
  }

  pub fn total_us(&self) -> u64 {
    self.digitize_us + self.accumulate_us
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_probe_counts() {
    let mut metrics = PassMetrics::new();
    metrics.faces = 2;
    metrics.record_probe(true);
    metrics.record_probe(true);
    metrics.record_probe(false);
    metrics.record_probe(true);

    assert_eq!(metrics.probes, 4);
    assert_eq!(metrics.hits, 3);
    assert_eq!(metrics.misses, 1);
    assert_eq!(metrics.miss_ratio(), 0.25);
    assert_eq!(metrics.probes_per_face(), 2.0);
  }

  #[test]
  fn test_empty_ratios() {
    let metrics = PassMetrics::new();
    assert_eq!(metrics.miss_ratio(), 0.0);
    assert_eq!(metrics.probes_per_face(), 0.0);
    assert_eq!(metrics.total_us(), 0);
  }
}
