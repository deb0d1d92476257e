//! Core triangle soup type with SoA (Structure of Arrays) layout.
//!
//! Corners are stored in triangle order, three per triangle:
//! - `pos_x: [t0c0.x, t0c1.x, t0c2.x, t1c0.x, ...]`
//! - `pos_y`, `pos_z` likewise
//!
//! There is no index buffer. Two triangles sharing a vertex each carry
//! their own copy, exactly as in an STL file.

use serde::{Deserialize, Serialize};
use meshdr_types::{MeshdrError, MeshdrResult};

/// A triangle soup stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all triangle corners.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all triangle corners.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all triangle corners.
    pub pos_z: Vec<f32>,

    /// Facet normal of each triangle. Metadata only: geometry is
    /// authoritative, see [`crate::normals::compute_facet_normals`].
    pub normals: Vec<[f32; 3]>,
}

impl TriangleMesh {
    /// Returns the number of triangle corners (3 × triangle count).
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns true if the mesh holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    /// Returns the position of corner `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [[f32; 3]; 3] {
        let base = t * 3;
        [
            self.position(base),
            self.position(base + 1),
            self.position(base + 2),
        ]
    }

    /// Appends a triangle with the given facet normal.
    pub fn push_triangle(&mut self, corners: [[f32; 3]; 3], normal: [f32; 3]) {
        for [x, y, z] in corners {
            self.pos_x.push(x);
            self.pos_y.push(y);
            self.pos_z.push(z);
        }
        self.normals.push(normal);
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(triangle_capacity * 3),
            pos_y: Vec::with_capacity(triangle_capacity * 3),
            pos_z: Vec::with_capacity(triangle_capacity * 3),
            normals: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All position arrays have the same length
    /// - Corner count is exactly 3 × triangle count
    /// - All coordinates are finite
    pub fn validate(&self) -> MeshdrResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(MeshdrError::InvalidInput(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if n != self.normals.len() * 3 {
            return Err(MeshdrError::InvalidInput(format!(
                "Corner count ({}) != 3 × triangle count ({})",
                n,
                self.normals.len()
            )));
        }

        let bad = (0..n).find(|&i| {
            !(self.pos_x[i].is_finite() && self.pos_y[i].is_finite() && self.pos_z[i].is_finite())
        });
        if let Some(i) = bad {
            return Err(MeshdrError::InvalidInput(format!(
                "Corner {} of triangle {} has a non-finite coordinate",
                i % 3,
                i / 3
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved corner positions.
    ///
    /// `positions` is `[x0, y0, z0, x1, y1, z1, ...]` with every nine
    /// floats forming one triangle. Normals are zeroed (recompute later).
    pub fn from_interleaved(positions: &[f32]) -> MeshdrResult<Self> {
        if positions.len() % 9 != 0 {
            return Err(MeshdrError::InvalidInput(format!(
                "Interleaved positions length ({}) not divisible by 9",
                positions.len()
            )));
        }

        let tri_count = positions.len() / 9;
        let mut mesh = Self::with_capacity(tri_count);
        for corner in positions.chunks_exact(3) {
            mesh.pos_x.push(corner[0]);
            mesh.pos_y.push(corner[1]);
            mesh.pos_z.push(corner[2]);
        }
        mesh.normals.resize(tri_count, [0.0; 3]);

        mesh.validate()?;
        Ok(mesh)
    }
}
