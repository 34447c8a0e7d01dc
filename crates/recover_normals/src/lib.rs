//! Command-line front end for surfel normal recovery.
//!
//! Loads a scene (JSON) or generates a box scene, runs the recovery pass and
//! reports the angular deviation statistic.

pub mod config;
pub mod output;
pub mod scene;

use anyhow::{Context, Result};
use surfel_normals::{recover, RecoveryReport, Surfel};

pub use config::RunConfig;
pub use output::RecoveryOutput;
pub use scene::{LoadedScene, SceneFile};

/// Run the recovery pass on `scene` with `config`.
pub fn run(scene: LoadedScene, config: &RunConfig) -> Result<RecoveryReport<Surfel>> {
	let recovery_config = config.recovery_config();
	let digitizer = scene
		.digitizer
		.with_epsilon(recovery_config.degenerate_epsilon);

	recover(
		&scene.hull,
		&digitizer,
		&scene.index,
		&scene.expected,
		&recovery_config,
	)
	.context("Normal recovery failed")
}

/// Parse a box size such as `4,3,2` or `5` (cube).
pub fn parse_box_dims(value: &str) -> Result<[i32; 3], String> {
	let parts: Vec<i32> = value
		.split(',')
		.map(|p| p.trim().parse::<i32>().map_err(|e| format!("{p:?}: {e}")))
		.collect::<Result<_, _>>()?;

	let dims = match parts.as_slice() {
		[n] => [*n; 3],
		[a, b, c] => [*a, *b, *c],
		_ => return Err(format!("expected 1 or 3 sizes, got {}", parts.len())),
	};

	if dims.iter().any(|&d| d <= 0) {
		return Err(format!("box sizes must be positive, got {value}"));
	}
	Ok(dims)
}
