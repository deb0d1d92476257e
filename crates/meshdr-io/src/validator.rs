//! Configuration validation.
//!
//! Runs before the base mesh is loaded so that bad parameters fail
//! without touching the filesystem or drawing any random numbers.

use meshdr_types::{MeshdrError, MeshdrResult};

use crate::contract::GenerationConfig;

/// Validates a complete generation config.
///
/// Checks:
/// - An input mesh path is present
/// - Resolution is at least 1
/// - Standard deviation and margin are finite and non-negative
pub fn validate_config(config: &GenerationConfig) -> MeshdrResult<()> {
    config.mesh_path()?;

    if config.resolution < 1 {
        return Err(MeshdrError::InvalidConfig(
            "control points per axis must be at least 1".into(),
        ));
    }
    if !config.std_dev.is_finite() || config.std_dev < 0.0 {
        return Err(MeshdrError::InvalidConfig(format!(
            "standard deviation must be a non-negative number, got {}",
            config.std_dev
        )));
    }
    if !config.margin.is_finite() || config.margin < 0.0 {
        return Err(MeshdrError::InvalidConfig(format!(
            "margin must be a non-negative number, got {}",
            config.margin
        )));
    }

    Ok(())
}
