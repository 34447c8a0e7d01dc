//! Surfel normal recovery.
//!
//! Recovers a normal for every surfel of a digital surface from the faces of
//! its convex hull and compares them against ground-truth normals.
//!
//! Output line (angles in radians):
//! - `#gridstep nbVtx min avg max stdVar`

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recover_normals::{parse_box_dims, run, LoadedScene, RecoveryOutput, RunConfig, SceneFile};
use surfel_normals::fixtures::{voxel_box, BoxDigitization};
use surfel_normals::SUMMARY_HEADER;

/// Surfel normal recovery from a digitized convex hull.
#[derive(Parser, Debug)]
#[command(name = "recover_normals")]
#[command(version, about = "Recovers surfel normals from convex hull faces and reports angular deviation")]
struct Args {
	/// Scene file (JSON).
	#[arg(short, long, required_unless_present = "demo_box")]
	scene: Option<PathBuf>,

	/// Generate a box scene instead, e.g. `8` or `8,4,2` voxels.
	#[arg(long, conflicts_with = "scene", value_parser = parse_box_dims)]
	demo_box: Option<[i32; 3]>,

	/// Run configuration (TOML).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Per-surfel results (JSON), overrides the config file.
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Digitize hull faces in parallel.
	#[arg(long)]
	parallel: bool,

	/// Grid step to report, overrides the scene.
	#[arg(short, long)]
	gridstep: Option<f64>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_target(false)
		.init();

	if let Err(e) = try_main(Args::parse()) {
		eprintln!("Error: {e:#}");
		std::process::exit(1);
	}
}

fn try_main(args: Args) -> Result<()> {
	let mut config = match &args.config {
		Some(path) => RunConfig::load(path)?,
		None => RunConfig::default(),
	};
	config.parallel |= args.parallel;
	if args.output.is_some() {
		config.output = args.output.clone();
	}

	let mut scene = match (&args.scene, args.demo_box) {
		(Some(path), _) => {
			tracing::info!("Loading scene from: {}", path.display());
			SceneFile::load(path)?.into_scene()?
		}
		(None, Some(dims)) => {
			tracing::info!("Generating {}x{}x{} box scene", dims[0], dims[1], dims[2]);
			LoadedScene::from_fixture(voxel_box(dims, BoxDigitization::Dilated)?, 1.0)
		}
		(None, None) => anyhow::bail!("either --scene or --demo-box is required"),
	};
	if let Some(gridstep) = args.gridstep {
		scene.gridstep = gridstep;
	}
	let gridstep = scene.gridstep;

	let report = run(scene, &config)?;

	println!("{SUMMARY_HEADER}");
	println!("{}", report.summary_line(gridstep));

	if let Some(path) = &config.output {
		RecoveryOutput::from_report(&report, gridstep, config.degrees).save(path)?;
		tracing::info!("Output written to: {}", path.display());
	}

	Ok(())
}
