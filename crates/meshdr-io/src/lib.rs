//! # meshdr-io
//!
//! Input/output boundary of meshdr.
//!
//! - [`stl`] — Triangle mesh load/save in STL format.
//! - [`contract`] — The generation configuration the CLI hands to the
//!   pipeline, loadable from TOML.
//! - [`validator`] — Range checks on that configuration.
//! - [`output`] — Output directory layout for batch mode.

pub mod contract;
pub mod output;
pub mod stl;
pub mod validator;

pub use contract::GenerationConfig;
pub use output::OutputDirectory;
