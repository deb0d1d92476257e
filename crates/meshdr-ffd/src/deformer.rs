//! Lattice deformer.
//!
//! [`LatticeDeformer`] holds at most one lattice. [`configure`] sizes it
//! to a bounding box; [`apply`] draws a random displacement field and warps
//! a point cloud with it. The deformer keeps no field between calls, so
//! every `apply` is an independent draw.
//!
//! [`configure`]: LatticeDeformer::configure
//! [`apply`]: LatticeDeformer::apply

use glam::DVec3;
use meshdr_mesh::Aabb;
use meshdr_types::{MeshdrError, MeshdrResult};
use rand::Rng;

use crate::bernstein::basis;
use crate::field::DisplacementField;
use crate::lattice::LatticeConfig;

/// Free-form deformer over one control lattice.
#[derive(Debug, Clone, Default)]
pub struct LatticeDeformer {
    lattice: Option<LatticeConfig>,
}

impl LatticeDeformer {
    /// Creates an unconfigured deformer.
    pub fn new() -> Self {
        Self { lattice: None }
    }

    /// Creates a deformer already sized to `bounds`.
    pub fn bounding(bounds: &Aabb, resolution: usize, margin: f64) -> MeshdrResult<Self> {
        let mut deformer = Self::new();
        deformer.configure(bounds.min, bounds.max, resolution, margin)?;
        Ok(deformer)
    }

    /// Sizes the lattice to enclose `[min_point, max_point]` plus `margin`
    /// on every side, with `resolution` control points per axis.
    ///
    /// On error the previous lattice (if any) is kept.
    pub fn configure(
        &mut self,
        min_point: DVec3,
        max_point: DVec3,
        resolution: usize,
        margin: f64,
    ) -> MeshdrResult<()> {
        let bounds = Aabb {
            min: min_point,
            max: max_point,
        };
        self.lattice = Some(LatticeConfig::bounding(&bounds, resolution, margin)?);
        Ok(())
    }

    /// The current lattice, if configured.
    pub fn lattice(&self) -> Option<&LatticeConfig> {
        self.lattice.as_ref()
    }

    fn configured(&self) -> MeshdrResult<&LatticeConfig> {
        self.lattice.as_ref().ok_or_else(|| {
            MeshdrError::InvalidState("lattice deformer used before configure".into())
        })
    }

    /// Draws a displacement field from `N(0, std_dev)` and applies it to
    /// `points`.
    ///
    /// `std_dev` and the lattice state are checked before anything is drawn
    /// from `rng`. Output points are not clamped to the lattice box.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        points: &[DVec3],
        std_dev: f64,
        rng: &mut R,
    ) -> MeshdrResult<Vec<DVec3>> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(MeshdrError::InvalidConfig(format!(
                "standard deviation must be a non-negative number, got {std_dev}"
            )));
        }
        let lattice = self.configured()?;
        let field = DisplacementField::sample(lattice.resolution, std_dev, rng)?;
        self.apply_field(points, &field)
    }

    /// Warps `points` with an explicit displacement field.
    ///
    /// Output has the same length and order as `points`.
    pub fn apply_field(
        &self,
        points: &[DVec3],
        field: &DisplacementField,
    ) -> MeshdrResult<Vec<DVec3>> {
        let lattice = self.configured()?;
        field.check_shape(lattice.resolution)?;
        Ok(points
            .iter()
            .map(|&p| deform_point(lattice, field, p))
            .collect())
    }

    /// World positions of every control point after displacing it by
    /// `field` (or at rest if `None`), in `[i, j, k]` order with `k`
    /// fastest.
    pub fn control_points(&self, field: Option<&DisplacementField>) -> MeshdrResult<Vec<DVec3>> {
        let lattice = self.configured()?;
        if let Some(field) = field {
            field.check_shape(lattice.resolution)?;
        }

        let n = lattice.resolution;
        let mut points = Vec::with_capacity(lattice.control_point_count());
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let rest = lattice.control_point(i, j, k);
                    let offset = field.map_or(DVec3::ZERO, |f| f.at(i, j, k) * lattice.size);
                    points.push(rest + offset);
                }
            }
        }
        Ok(points)
    }
}

/// Deforms one point. Points outside the unit lattice box are returned
/// unchanged.
fn deform_point(lattice: &LatticeConfig, field: &DisplacementField, p: DVec3) -> DVec3 {
    let s = lattice.to_lattice(p);
    if s.cmplt(DVec3::ZERO).any() || s.cmpgt(DVec3::ONE).any() {
        return p;
    }

    let degree = lattice.degree();
    let bu = basis(degree, s.x);
    let bv = basis(degree, s.y);
    let bw = basis(degree, s.z);

    let mut shift = DVec3::ZERO;
    for (i, wu) in bu.iter().enumerate() {
        for (j, wv) in bv.iter().enumerate() {
            let wuv = wu * wv;
            for (k, ww) in bw.iter().enumerate() {
                shift += field.at(i, j, k) * (wuv * ww);
            }
        }
    }

    p + shift * lattice.size
}
