//! surfel_normals - Surfel normal recovery from digitized convex hulls
//!
//! Given the surfels of a Gauss-digitized surface and a convex polyhedron
//! approximating the same surface, this crate assigns every surfel a normal by
//! digitizing each hull face and folding the face normal into the surfels the
//! face covers. The recovered normals are then scored against ground-truth
//! normals by angular deviation.
//!
//! # Features
//!
//! - **Normal Accumulation**: running renormalization of face normals per
//!   surfel, with an inside/outside partition of the digitized surfels
//! - **Deviation Statistics**: per-surfel angles plus min/mean/max/stddev
//! - **Parallel Digitization**: faces digitized on the rayon pool with results
//!   bit-identical to the sequential pass
//! - **Pluggable Collaborators**: digitizers and surfel lookups are traits; a
//!   replay digitizer and box fixtures are included
//!
//! # Example
//!
//! ```ignore
//! use surfel_normals::{fixtures, recover, RecoveryConfig};
//!
//! let scene = fixtures::unit_cube()?;
//! let report = recover(
//!   &scene.hull,
//!   &scene.digitizer,
//!   &scene.index,
//!   &scene.expected,
//!   &RecoveryConfig::default(),
//! )?;
//!
//! println!("{}", report.summary_line(1.0));
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

// Re-export commonly used items
pub use config::{AccumulationMode, RecoveryConfig, DEFAULT_DEGENERATE_EPSILON};
pub use error::RecoveryError;
pub use metrics::PassMetrics;
pub use types::{ConvexHull, HullFace, HullPolygon, Surfel};

// Surfel identity to index association
pub mod surfel_index;
pub use surfel_index::{SurfelIndex, SurfelLookup};

// Hull face digitization contract
pub mod digitizer;
pub use digitizer::{polygon_normal, DigitizedFace, FaceDigitizer, TableDigitizer};

// Normal accumulation
pub mod accumulator;
pub use accumulator::{accumulate, Accumulation};

// Angular deviation statistics
pub mod deviation;
pub use deviation::{angle_deviation, deviation, Deviation, Statistic};

// End-to-end pass
pub mod pipeline;
pub use pipeline::{recover, RecoveryReport, SUMMARY_HEADER};

// Deterministic box scenes
pub mod fixtures;
