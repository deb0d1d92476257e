//! # meshdr-types
//!
//! Shared error types and generation defaults for the meshdr
//! random mesh deformation toolkit.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other meshdr crates share.

pub mod constants;
pub mod error;

pub use error::{MeshdrError, MeshdrResult};
