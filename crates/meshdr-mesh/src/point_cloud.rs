//! Mesh ↔ point cloud conversion.
//!
//! A [`PointCloudMesh`] flattens every triangle corner of a mesh into one
//! point cloud, triangle by triangle, corner by corner. Every three
//! consecutive points therefore form one triangle of the source mesh in
//! its original order. Deformations operate on the point cloud and hand
//! the result back to [`PointCloudMesh::reconstruct`], which relies on
//! that ordering to rebuild the triangles.

use glam::DVec3;
use meshdr_types::{MeshdrError, MeshdrResult};

use crate::bounds::Aabb;
use crate::mesh::TriangleMesh;
use crate::normals::compute_facet_normals;

/// A triangle mesh together with its flattened point cloud and bounds.
#[derive(Debug, Clone)]
pub struct PointCloudMesh {
    mesh: TriangleMesh,
    point_cloud: Vec<DVec3>,
    bounds: Aabb,
}

impl PointCloudMesh {
    /// Wraps `mesh`, flattening its corners into a point cloud and
    /// computing the bounding box.
    ///
    /// Fails with `InvalidInput` if the mesh is malformed or has no
    /// triangles.
    pub fn from_mesh(mesh: TriangleMesh) -> MeshdrResult<Self> {
        mesh.validate()?;
        if mesh.is_empty() {
            return Err(MeshdrError::InvalidInput("mesh has no triangles".into()));
        }

        let point_cloud: Vec<DVec3> = (0..mesh.corner_count())
            .map(|i| {
                DVec3::new(
                    f64::from(mesh.pos_x[i]),
                    f64::from(mesh.pos_y[i]),
                    f64::from(mesh.pos_z[i]),
                )
            })
            .collect();

        let bounds = Aabb::from_points(&point_cloud)
            .ok_or_else(|| MeshdrError::InvalidInput("mesh has no triangles".into()))?;

        Ok(Self {
            mesh,
            point_cloud,
            bounds,
        })
    }

    /// Builds a new mesh with this mesh's topology and the given corner
    /// positions.
    ///
    /// `point_cloud` must hold exactly 3 × [`triangle_count`] points in
    /// triangle order. Positions are stored at mesh precision (f32), so the
    /// returned point cloud is always the flattening of the returned mesh.
    /// Facet normals are carried over unchanged; call
    /// [`recompute_normals`] if they must match the new geometry.
    ///
    /// [`triangle_count`]: Self::triangle_count
    /// [`recompute_normals`]: Self::recompute_normals
    pub fn reconstruct(&self, point_cloud: Vec<DVec3>) -> MeshdrResult<Self> {
        let expected = self.point_cloud.len();
        if point_cloud.len() % 3 != 0 || point_cloud.len() != expected {
            return Err(MeshdrError::point_count(expected, point_cloud.len()));
        }

        // The stored cloud holds exactly the f32 coordinates kept in the mesh.
        let mut mesh = TriangleMesh::with_capacity(self.triangle_count());
        let point_cloud: Vec<DVec3> = point_cloud
            .iter()
            .map(|p| {
                let (x, y, z) = (p.x as f32, p.y as f32, p.z as f32);
                mesh.pos_x.push(x);
                mesh.pos_y.push(y);
                mesh.pos_z.push(z);
                DVec3::new(f64::from(x), f64::from(y), f64::from(z))
            })
            .collect();
        mesh.normals = self.mesh.normals.clone();

        let bounds = Aabb::from_points(&point_cloud)
            .ok_or_else(|| MeshdrError::point_count(expected, 0))?;

        Ok(Self {
            mesh,
            point_cloud,
            bounds,
        })
    }

    /// Recomputes facet normals from the current geometry.
    pub fn recompute_normals(&mut self) {
        compute_facet_normals(&mut self.mesh);
    }

    /// The underlying triangle mesh.
    #[inline]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Consumes the wrapper, returning the triangle mesh.
    pub fn into_mesh(self) -> TriangleMesh {
        self.mesh
    }

    /// The flattened corner positions, three per triangle.
    #[inline]
    pub fn point_cloud(&self) -> &[DVec3] {
        &self.point_cloud
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    pub fn min_point(&self) -> DVec3 {
        self.bounds.min
    }

    #[inline]
    pub fn max_point(&self) -> DVec3 {
        self.bounds.max
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Largest distance between corresponding points of `self` and `other`.
    ///
    /// Returns 0.0 if the two clouds differ in length.
    pub fn max_displacement(&self, other: &Self) -> f64 {
        if self.point_cloud.len() != other.point_cloud.len() {
            return 0.0;
        }
        self.point_cloud
            .iter()
            .zip(&other.point_cloud)
            .map(|(a, b)| a.distance(*b))
            .fold(0.0, f64::max)
    }
}
