//! Run configuration (TOML).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use surfel_normals::{RecoveryConfig, DEFAULT_DEGENERATE_EPSILON};

/// Options for one recovery run. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
	/// Digitize hull faces on the rayon pool.
	pub parallel: bool,
	/// Squared area threshold for degenerate hull faces.
	pub degenerate_epsilon: f64,
	/// Where to write the per-surfel results (JSON).
	pub output: Option<PathBuf>,
	/// Write deviation samples in degrees instead of radians.
	pub degrees: bool,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			parallel: false,
			degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
			output: None,
			degrees: false,
		}
	}
}

impl RunConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::from_toml(&content)
	}

	/// Parse and validate configuration from TOML text.
	pub fn from_toml(content: &str) -> Result<Self> {
		let config: RunConfig =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if !(config.degenerate_epsilon >= 0.0) {
			anyhow::bail!(
				"degenerate_epsilon must be non-negative, got {}",
				config.degenerate_epsilon
			);
		}

		Ok(config)
	}

	/// Library configuration for this run.
	pub fn recovery_config(&self) -> RecoveryConfig {
		RecoveryConfig::new()
			.with_parallel(self.parallel)
			.with_degenerate_epsilon(self.degenerate_epsilon)
	}
}
