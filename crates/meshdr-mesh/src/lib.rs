//! # meshdr-mesh
//!
//! Triangle soup representation with Structure-of-Arrays (SoA) layout,
//! and its bidirectional conversion to an ordered point cloud.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Unindexed triangles, three corners each, plus one
//!   facet normal per triangle. The layout STL files use.
//! - [`PointCloudMesh`] — A mesh viewed as a flat point cloud whose every
//!   three consecutive points form one triangle.
//! - [`Aabb`] — Axis-aligned bounding box of a point cloud.
//! - Procedural generators for tests and demos.

pub mod bounds;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod point_cloud;

pub use bounds::Aabb;
pub use glam::DVec3;
pub use mesh::TriangleMesh;
pub use point_cloud::PointCloudMesh;
