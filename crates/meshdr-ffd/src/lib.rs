//! # meshdr-ffd
//!
//! Free-form deformation (FFD) over a regular control lattice.
//!
//! A point cloud is embedded in a box spanned by `resolution³` control
//! points. Displacing the control points warps every embedded point
//! through a tensor-product Bernstein basis:
//!
//! ```text
//! s      = (p - origin) / size
//! shift  = Σ B_i(s.x) B_j(s.y) B_k(s.z) · μ[i, j, k]
//! p'     = p + shift ⊙ size
//! ```
//!
//! Points outside the box are left where they are.
//!
//! ## Key Types
//!
//! - [`LatticeConfig`] — Origin, size and resolution of the lattice.
//! - [`DisplacementField`] — Per-axis control-point offsets `{x, y, z}`.
//! - [`LatticeDeformer`] — Owns one lattice and applies fields to points.

pub mod bernstein;
pub mod deformer;
pub mod field;
pub mod lattice;

pub use deformer::LatticeDeformer;
pub use field::DisplacementField;
pub use lattice::LatticeConfig;
