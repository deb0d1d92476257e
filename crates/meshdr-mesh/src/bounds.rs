//! Axis-aligned bounding box over a point cloud.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Componentwise min/max of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Computes the bounds of `points`. Returns `None` for an empty slice.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// True if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns a copy grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(margin),
            max: self.max + DVec3::splat(margin),
        }
    }
}
