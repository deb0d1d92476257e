//! Facet normal computation from triangle geometry.

use crate::mesh::TriangleMesh;

/// Recompute facet normals from corner positions.
///
/// Each normal is the normalized cross product of the triangle's two
/// edges from corner 0, following the right-hand winding. Degenerate
/// triangles get a zero normal, which STL readers accept.
///
/// This modifies `mesh.normals` in place.
pub fn compute_facet_normals(mesh: &mut TriangleMesh) {
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);

        // Edge vectors
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];

        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];

        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        mesh.normals[t] = if len > 1e-20 {
            let inv = 1.0 / len;
            [nx * inv, ny * inv, nz * inv]
        } else {
            [0.0; 3]
        };
    }
}
