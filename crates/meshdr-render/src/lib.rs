//! # meshdr-render
//!
//! Pluggable presentation of meshes for demo mode.
//!
//! Provides a `Renderer` trait with a `SummaryRenderer` that prints each
//! mesh's shape to stdout, and a `JsonFrameExporter` that writes all
//! submitted meshes to one JSON file for an external viewer.

pub mod json_exporter;
pub mod renderer;
pub use json_exporter::JsonFrameExporter;
pub use renderer::{RenderFrame, Renderer, SummaryRenderer};
