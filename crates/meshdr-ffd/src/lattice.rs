//! Lattice configuration.

use glam::DVec3;
use meshdr_mesh::Aabb;
use meshdr_types::constants::EPSILON;
use meshdr_types::{MeshdrError, MeshdrResult};
use serde::{Deserialize, Serialize};

/// Placement and resolution of a control lattice.
///
/// The lattice spans the box `[origin, origin + size]` with `resolution`
/// control points along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Minimum corner of the lattice box.
    pub origin: DVec3,
    /// Extent of the lattice box along each axis.
    pub size: DVec3,
    /// Control points per axis.
    pub resolution: usize,
}

impl LatticeConfig {
    /// Creates a lattice config, rejecting `resolution < 1` and
    /// negative or non-finite extents.
    pub fn new(origin: DVec3, size: DVec3, resolution: usize) -> MeshdrResult<Self> {
        if resolution < 1 {
            return Err(MeshdrError::InvalidConfig(
                "lattice resolution must be at least 1".into(),
            ));
        }
        if !origin.is_finite() || !size.is_finite() {
            return Err(MeshdrError::InvalidConfig(
                "lattice origin and size must be finite".into(),
            ));
        }
        if size.min_element() < 0.0 {
            return Err(MeshdrError::InvalidConfig(format!(
                "lattice size must be non-negative, got {size}"
            )));
        }
        Ok(Self {
            origin,
            size,
            resolution,
        })
    }

    /// Lattice enclosing `bounds` with `margin` of padding on every side:
    /// origin = `min - margin`, size = `(max - min) + 2·margin`.
    pub fn bounding(bounds: &Aabb, resolution: usize, margin: f64) -> MeshdrResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(MeshdrError::InvalidConfig(format!(
                "lattice margin must be a non-negative number, got {margin}"
            )));
        }
        let padded = bounds.padded(margin);
        Self::new(padded.min, padded.size(), resolution)
    }

    /// Polynomial degree of the basis along each axis.
    #[inline]
    pub fn degree(&self) -> usize {
        self.resolution - 1
    }

    /// Total number of control points (`resolution³`).
    #[inline]
    pub fn control_point_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// Shape of a per-axis displacement array.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.resolution, self.resolution, self.resolution)
    }

    /// Maps a world-space point to lattice coordinates, where the box is
    /// `[0, 1]³`. Axes with zero extent map to 0.
    pub fn to_lattice(&self, p: DVec3) -> DVec3 {
        let rel = p - self.origin;
        let axis = |r: f64, s: f64| if s > EPSILON { r / s } else { 0.0 };
        DVec3::new(
            axis(rel.x, self.size.x),
            axis(rel.y, self.size.y),
            axis(rel.z, self.size.z),
        )
    }

    /// Maps lattice coordinates back to world space.
    pub fn to_world(&self, s: DVec3) -> DVec3 {
        self.origin + s * self.size
    }

    /// Rest position of control point `(i, j, k)`.
    ///
    /// With a single control point per axis it sits at the box center.
    pub fn control_point(&self, i: usize, j: usize, k: usize) -> DVec3 {
        let param = |idx: usize| {
            if self.resolution == 1 {
                0.5
            } else {
                idx as f64 / self.degree() as f64
            }
        };
        self.to_world(DVec3::new(param(i), param(j), param(k)))
    }
}
