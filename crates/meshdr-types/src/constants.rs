//! Generation defaults.

/// Default number of samples generated in batch mode.
pub const DEFAULT_COUNT: usize = 1000;

/// Default standard deviation of control-point displacements,
/// in lattice-normalized units.
pub const DEFAULT_STD_DEV: f64 = 0.1;

/// Default control points per lattice axis.
pub const DEFAULT_RESOLUTION: usize = 3;

/// Default padding added on each side of the bounding box (model units).
pub const DEFAULT_MARGIN: f64 = 0.05;

/// Default output directory for batch mode.
pub const DEFAULT_OUTPUT_DIR: &str = "./results";

/// Number of generated samples shown in demo mode.
pub const DEMO_SAMPLE_COUNT: usize = 3;

/// Lattice extents at or below this are treated as flat.
pub const EPSILON: f64 = 1.0e-12;
