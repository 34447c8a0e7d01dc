//! Per-surfel results written for downstream viewers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use surfel_normals::{RecoveryReport, Surfel};

/// Root of the output JSON file.
#[derive(Debug, Serialize)]
pub struct RecoveryOutput {
	pub gridstep: f64,
	pub surfel_count: usize,
	pub inside_count: usize,
	/// Digitized surfels absent from the surface.
	pub outside: Vec<[i32; 3]>,
	/// Estimated normal per surfel, zero when not recovered.
	pub estimated_normals: Vec<[f64; 3]>,
	pub recovered: Vec<bool>,
	/// Angular deviation per surfel.
	pub deviation: Vec<f64>,
	/// `"radians"` or `"degrees"`.
	pub deviation_unit: &'static str,
	pub stat: StatOutput,
	pub metrics: MetricsOutput,
}

/// Deviation statistic, in the same unit as `deviation`.
#[derive(Debug, Serialize)]
pub struct StatOutput {
	pub min: f64,
	pub mean: f64,
	pub max: f64,
	pub stddev: f64,
}

#[derive(Debug, Serialize)]
pub struct MetricsOutput {
	pub faces: usize,
	pub probes: u64,
	pub hits: u64,
	pub misses: u64,
	pub digitize_us: u64,
	pub accumulate_us: u64,
}

impl RecoveryOutput {
	pub fn from_report(report: &RecoveryReport<Surfel>, gridstep: f64, degrees: bool) -> Self {
		let accumulation = &report.accumulation;
		let stat = &report.deviation.stat;
		let scale = |x: f64| if degrees { x.to_degrees() } else { x };
		let metrics = &accumulation.metrics;

		Self {
			gridstep,
			surfel_count: accumulation.len(),
			inside_count: accumulation.inside.len(),
			outside: accumulation.outside.iter().map(|s| s.kcoords).collect(),
			estimated_normals: accumulation.normals.iter().map(|n| n.to_array()).collect(),
			recovered: accumulation.recovered_mask(),
			deviation: report.deviation.samples.iter().map(|&x| scale(x)).collect(),
			deviation_unit: if degrees { "degrees" } else { "radians" },
			stat: StatOutput {
				min: scale(stat.min),
				mean: scale(stat.mean),
				max: scale(stat.max),
				stddev: scale(stat.stddev()),
			},
			metrics: MetricsOutput {
				faces: metrics.faces,
				probes: metrics.probes,
				hits: metrics.hits,
				misses: metrics.misses,
				digitize_us: metrics.digitize_us,
				accumulate_us: metrics.accumulate_us,
			},
		}
	}

	/// Write as pretty-printed JSON.
	pub fn save(&self, path: &Path) -> Result<()> {
		let content = serde_json::to_string_pretty(self).context("Failed to serialize output")?;
		std::fs::write(path, content)
			.with_context(|| format!("Failed to write output file: {}", path.display()))?;
		Ok(())
	}
}
