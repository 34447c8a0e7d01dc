//! Scene file parsing.
//!
//! A scene bundles what the external surface, hull and digitizer builders
//! produced for one run: surfels, ground-truth normals, hull geometry and one
//! recorded surfel set per hull face.

use anyhow::{Context, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use surfel_normals::fixtures;
use surfel_normals::{ConvexHull, HullFace, Surfel, SurfelIndex, TableDigitizer};

/// Root of a scene JSON file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneFile {
	/// Grid step the surface was digitized at (reported, not used).
	#[serde(default = "default_gridstep")]
	pub gridstep: f64,
	/// Surfels in Khalimsky coordinates, in index order.
	pub surfels: Vec<[i32; 3]>,
	/// Ground-truth unit normal per surfel.
	pub expected_normals: Vec<[f64; 3]>,
	/// Convex hull geometry.
	pub hull: HullFile,
	/// Recorded digitization per hull face, in Khalimsky coordinates.
	pub digitizations: Vec<Vec<[i32; 3]>>,
}

/// Convex hull section of a scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HullFile {
	pub vertices: Vec<[f64; 3]>,
	/// Vertex indices per face, counter-clockwise seen from outside.
	pub faces: Vec<Vec<usize>>,
}

fn default_gridstep() -> f64 {
	1.0
}

/// Scene converted to the library's types.
#[derive(Debug, Clone)]
pub struct LoadedScene {
	pub gridstep: f64,
	pub index: SurfelIndex<Surfel>,
	pub hull: ConvexHull,
	pub digitizer: TableDigitizer<Surfel>,
	pub expected: Vec<DVec3>,
}

impl SceneFile {
	/// Load and validate a scene from a JSON file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		Self::from_json(&content)
			.with_context(|| format!("Invalid scene file: {}", path.display()))
	}

	/// Parse and validate a scene from JSON text.
	pub fn from_json(content: &str) -> Result<Self> {
		let scene: SceneFile =
			serde_json::from_str(content).with_context(|| "Failed to parse scene JSON")?;
		scene.validate()?;
		Ok(scene)
	}

	/// Check the cross-section invariants the recovery pass relies on.
	pub fn validate(&self) -> Result<()> {
		if !(self.gridstep > 0.0) {
			anyhow::bail!("gridstep must be positive, got {}", self.gridstep);
		}
		if self.surfels.is_empty() {
			anyhow::bail!("Scene must have at least one surfel");
		}
		if let Some(bad) = self
			.surfels
			.iter()
			.find(|k| !Surfel::from_khalimsky(**k).is_valid())
		{
			anyhow::bail!("{:?} is not a surfel (needs exactly one even coordinate)", bad);
		}
		if self.expected_normals.len() != self.surfels.len() {
			anyhow::bail!(
				"{} expected normals for {} surfels",
				self.expected_normals.len(),
				self.surfels.len()
			);
		}
		if self.digitizations.len() != self.hull.faces.len() {
			anyhow::bail!(
				"{} digitizations for {} hull faces",
				self.digitizations.len(),
				self.hull.faces.len()
			);
		}
		for (face, cells) in self.digitizations.iter().enumerate() {
			if let Some(bad) = cells.iter().find(|k| !Surfel::from_khalimsky(**k).is_valid()) {
				anyhow::bail!("digitization of face {} contains non-surfel {:?}", face, bad);
			}
		}
		Ok(())
	}

	/// Build the library inputs; fails on duplicate surfels.
	pub fn into_scene(self) -> Result<LoadedScene> {
		let surfels = self.surfels.into_iter().map(Surfel::from_khalimsky).collect();
		let index = SurfelIndex::new(surfels).context("Surfel list is not a bijection")?;

		let hull = ConvexHull::new(
			self.hull.vertices.into_iter().map(DVec3::from_array).collect(),
			self.hull
				.faces
				.into_iter()
				.map(|face| face.into_iter().collect::<HullFace>())
				.collect(),
		);

		let digitizer = TableDigitizer::new(
			self.digitizations
				.into_iter()
				.map(|cells| cells.into_iter().map(Surfel::from_khalimsky)),
		);

		Ok(LoadedScene {
			gridstep: self.gridstep,
			index,
			hull,
			digitizer,
			expected: self.expected_normals.into_iter().map(DVec3::from_array).collect(),
		})
	}
}

impl LoadedScene {
	/// Wrap a generated box scene.
	pub fn from_fixture(scene: fixtures::Scene, gridstep: f64) -> Self {
		Self {
			gridstep,
			index: scene.index,
			hull: scene.hull,
			digitizer: scene.digitizer,
			expected: scene.expected,
		}
	}
}
