//! Control-point displacement fields.
//!
//! Offsets are expressed in lattice units: a value of `0.1` in `x`
//! moves that control point by 10% of the lattice width along X.

use glam::DVec3;
use meshdr_types::{MeshdrError, MeshdrResult};
use ndarray::Array3;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Per-axis displacement of every control point, indexed `[i, j, k]`
/// along X, Y and Z of the lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementField {
    pub x: Array3<f64>,
    pub y: Array3<f64>,
    pub z: Array3<f64>,
}

impl DisplacementField {
    /// The identity field: no control point moves.
    pub fn zeros(resolution: usize) -> Self {
        let shape = (resolution, resolution, resolution);
        Self {
            x: Array3::zeros(shape),
            y: Array3::zeros(shape),
            z: Array3::zeros(shape),
        }
    }

    /// Draws three independent arrays from `N(0, std_dev)`, X first,
    /// then Y, then Z.
    pub fn sample<R: Rng + ?Sized>(
        resolution: usize,
        std_dev: f64,
        rng: &mut R,
    ) -> MeshdrResult<Self> {
        let normal = Normal::new(0.0, std_dev).map_err(|e| {
            MeshdrError::InvalidConfig(format!("standard deviation {std_dev}: {e}"))
        })?;
        let shape = (resolution, resolution, resolution);
        let x = Array3::from_shape_simple_fn(shape, || normal.sample(rng));
        let y = Array3::from_shape_simple_fn(shape, || normal.sample(rng));
        let z = Array3::from_shape_simple_fn(shape, || normal.sample(rng));
        Ok(Self { x, y, z })
    }

    /// Offset of control point `(i, j, k)` as a vector.
    #[inline]
    pub fn at(&self, i: usize, j: usize, k: usize) -> DVec3 {
        DVec3::new(self.x[[i, j, k]], self.y[[i, j, k]], self.z[[i, j, k]])
    }

    /// Checks that all three arrays are `[resolution; 3]`.
    pub fn check_shape(&self, resolution: usize) -> MeshdrResult<()> {
        let expected = (resolution, resolution, resolution);
        for (axis, array) in [("x", &self.x), ("y", &self.y), ("z", &self.z)] {
            if array.dim() != expected {
                return Err(MeshdrError::ShapeMismatch {
                    expected: format!("{axis} field of shape {expected:?}"),
                    actual: format!("{:?}", array.dim()),
                });
            }
        }
        Ok(())
    }

    /// Largest absolute offset over all axes.
    pub fn max_abs(&self) -> f64 {
        self.x
            .iter()
            .chain(self.y.iter())
            .chain(self.z.iter())
            .fold(0.0, |acc, v| acc.max(v.abs()))
    }
}
