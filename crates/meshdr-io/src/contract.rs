//! Generation configuration.
//!
//! Built once at process entry (from CLI flags, optionally layered over a
//! TOML file) and passed by reference into the pipeline. Field names in
//! TOML match the CLI flags.

use std::path::{Path, PathBuf};

use meshdr_types::constants;
use meshdr_types::{MeshdrError, MeshdrResult};
use serde::{Deserialize, Serialize};

/// Complete configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Base mesh to deform. Required before running.
    pub mesh: Option<PathBuf>,
    /// Directory receiving `result_<index>.stl` files.
    pub outpath: PathBuf,
    /// Number of samples to generate.
    pub count: usize,
    /// Standard deviation of control-point displacements (lattice units).
    #[serde(rename = "std")]
    pub std_dev: f64,
    /// Control points per lattice axis.
    #[serde(rename = "control")]
    pub resolution: usize,
    /// Padding around the mesh bounds on each side (model units).
    pub margin: f64,
    /// Show the base and a few samples instead of writing files.
    pub demo: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mesh: None,
            outpath: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            count: constants::DEFAULT_COUNT,
            std_dev: constants::DEFAULT_STD_DEV,
            resolution: constants::DEFAULT_RESOLUTION,
            margin: constants::DEFAULT_MARGIN,
            demo: false,
        }
    }
}

impl GenerationConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> MeshdrResult<Self> {
        toml::from_str(text).map_err(|e| MeshdrError::Serialization(format!("config: {e}")))
    }

    /// Reads and parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> MeshdrResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Path of the base mesh, or `InvalidConfig` if none was given.
    pub fn mesh_path(&self) -> MeshdrResult<&Path> {
        self.mesh
            .as_deref()
            .ok_or_else(|| MeshdrError::InvalidConfig("no input mesh given".into()))
    }
}
