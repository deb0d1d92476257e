//! JSON frame exporter — writes demo meshes for an external viewer.
//!
//! Implements the `Renderer` trait. Captures corner positions of every
//! submitted frame, then serializes them to a JSON file on `finalize()`.
//! Every nine consecutive floats of `positions` form one triangle.

use std::path::{Path, PathBuf};

use meshdr_mesh::PointCloudMesh;
use meshdr_types::{MeshdrError, MeshdrResult};
use serde::Serialize;

use crate::renderer::{RenderFrame, Renderer};

/// A single frame of captured mesh data.
#[derive(Serialize)]
struct FrameData {
    label: String,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    control_points: Vec<[f64; 3]>,
}

/// Complete export document.
#[derive(Serialize)]
struct ExportData {
    triangle_count: usize,
    frames: Vec<FrameData>,
}

/// Exports frames to a JSON file for visual inspection.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("demo.json");
/// exporter.init(&base)?;
/// exporter.submit_frame(&RenderFrame::from_mesh("base", &base))?;
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    triangle_count: usize,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            triangle_count: 0,
            frames: Vec::new(),
            submitted: 0,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, base: &PointCloudMesh) -> MeshdrResult<()> {
        self.triangle_count = base.triangle_count();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> MeshdrResult<()> {
        let n = frame.pos_x.len();
        let mut positions = Vec::with_capacity(n * 3);
        for i in 0..n {
            positions.push(frame.pos_x[i]);
            positions.push(frame.pos_y[i]);
            positions.push(frame.pos_z[i]);
        }
        self.frames.push(FrameData {
            label: frame.label.clone(),
            positions,
            control_points: frame.control_points.iter().map(|p| p.to_array()).collect(),
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> MeshdrResult<()> {
        let data = ExportData {
            triangle_count: self.triangle_count,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data).map_err(|e| {
            MeshdrError::Serialization(format!("JSON serialization failed: {e}"))
        })?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path.display(), "demo frames exported");
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
