//! Procedural mesh generators for tests and demos.
//!
//! These generators produce deterministic triangle soups with
//! counter-clockwise winding and correct facet normals.

use crate::mesh::TriangleMesh;
use crate::normals::compute_facet_normals;

/// A single right triangle `(0,0,0), (1,0,0), (0,1,0)` facing +Z.
pub fn single_triangle() -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(1);
    mesh.push_triangle(
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        [0.0, 0.0, 1.0],
    );
    mesh
}

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols` — Number of quads along X.
/// - `rows` — Number of quads along Y.
/// - `width` — Total width.
/// - `height` — Total height.
///
/// # Example
/// ```
/// use meshdr_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// assert_eq!(mesh.corner_count(), 24);
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let vertex = |i: usize, j: usize| -> [f32; 3] {
        [
            -half_w + width * i as f32 / cols as f32,
            -half_h + height * j as f32 / rows as f32,
            0.0,
        ]
    };

    for j in 0..rows {
        for i in 0..cols {
            let bl = vertex(i, j);
            let br = vertex(i + 1, j);
            let tl = vertex(i, j + 1);
            let tr = vertex(i + 1, j + 1);

            mesh.push_triangle([bl, br, tl], [0.0, 0.0, 1.0]);
            mesh.push_triangle([br, tr, tl], [0.0, 0.0, 1.0]);
        }
    }

    mesh
}

/// Generates an axis-aligned closed box with its minimum corner at the
/// origin. Twelve triangles, outward-facing.
pub fn cuboid(sx: f32, sy: f32, sz: f32) -> TriangleMesh {
    let p = |x: f32, y: f32, z: f32| [x * sx, y * sy, z * sz];
    let quads = [
        // -Z, +Z
        [p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)],
        [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)],
        // -Y, +Y
        [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)],
        [p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.), p(1., 1., 0.)],
        // -X, +X
        [p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.), p(0., 1., 0.)],
        [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)],
    ];

    let mut mesh = TriangleMesh::with_capacity(12);
    for [a, b, c, d] in quads {
        mesh.push_triangle([a, b, c], [0.0; 3]);
        mesh.push_triangle([a, c, d], [0.0; 3]);
    }
    compute_facet_normals(&mut mesh);
    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius` — Sphere radius.
/// - `stacks` — Number of horizontal slices (latitude divisions).
/// - `slices` — Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let vertex = |i: usize, j: usize| -> [f32; 3] {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
        [
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        ]
    };

    let mut mesh = TriangleMesh::with_capacity(stacks * slices * 2);
    for i in 0..stacks {
        for j in 0..slices {
            let a = vertex(i, j);
            let a1 = vertex(i, j + 1);
            let b = vertex(i + 1, j);
            let b1 = vertex(i + 1, j + 1);

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle([a, a1, b], [0.0; 3]);
            }
            if i != stacks - 1 {
                mesh.push_triangle([a1, b1, b], [0.0; 3]);
            }
        }
    }

    compute_facet_normals(&mut mesh);
    mesh
}
