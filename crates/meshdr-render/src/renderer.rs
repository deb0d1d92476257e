//! Renderer trait and the stdout summary renderer.

use meshdr_mesh::{Aabb, DVec3, PointCloudMesh};
use meshdr_types::MeshdrResult;

/// One mesh to present.
pub struct RenderFrame {
    /// Caption, e.g. `"base"` or `"sample 0"`.
    pub label: String,
    /// Corner positions, three per triangle.
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,
    /// Bounds of the corners.
    pub bounds: Aabb,
    /// Lattice control points to overlay, if any.
    pub control_points: Vec<DVec3>,
}

impl RenderFrame {
    /// Create a frame from a mesh.
    pub fn from_mesh(label: impl Into<String>, mesh: &PointCloudMesh) -> Self {
        let m = mesh.mesh();
        Self {
            label: label.into(),
            pos_x: m.pos_x.clone(),
            pos_y: m.pos_y.clone(),
            pos_z: m.pos_z.clone(),
            bounds: mesh.bounds(),
            control_points: Vec::new(),
        }
    }

    /// Attach lattice control points.
    pub fn with_control_points(mut self, points: Vec<DVec3>) -> Self {
        self.control_points = points;
        self
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.pos_x.len() / 3
    }
}

/// Trait for presenting meshes.
///
/// # Implementations
/// - [`SummaryRenderer`] — Prints a one-line summary per frame
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Writes frames to JSON
pub trait Renderer {
    /// Initialize the renderer with the base mesh.
    fn init(&mut self, base: &PointCloudMesh) -> MeshdrResult<()>;

    /// Submit a frame for presentation.
    fn submit_frame(&mut self, frame: &RenderFrame) -> MeshdrResult<()>;

    /// Finalize rendering (flush buffers, write files, etc.).
    fn finalize(&mut self) -> MeshdrResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Prints each frame's label, triangle count and bounds.
#[derive(Default)]
pub struct SummaryRenderer {
    frames: u32,
    base_size: Option<DVec3>,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats the summary line for `frame`.
    pub fn describe(&self, frame: &RenderFrame) -> String {
        let b = frame.bounds;
        let mut line = format!(
            "showing {}: {} triangles, bounds [{:.4}, {:.4}, {:.4}] .. [{:.4}, {:.4}, {:.4}]",
            frame.label,
            frame.triangle_count(),
            b.min.x,
            b.min.y,
            b.min.z,
            b.max.x,
            b.max.y,
            b.max.z,
        );
        if let Some(base) = self.base_size {
            let growth = b.size() - base;
            line.push_str(&format!(
                ", size change [{:+.4}, {:+.4}, {:+.4}]",
                growth.x, growth.y, growth.z
            ));
        }
        line
    }
}

impl Renderer for SummaryRenderer {
    fn init(&mut self, base: &PointCloudMesh) -> MeshdrResult<()> {
        self.base_size = Some(base.bounds().size());
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> MeshdrResult<()> {
        println!("{}", self.describe(frame));
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> MeshdrResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "summary"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
