//! Core data structures and traits for trifan
//!
//! This crate provides the fundamental types for 2D triangulation,
//! including points, point sets, meshes, the closed error taxonomy and
//! the capability ports wired into the triangulation service.

pub mod error;
pub mod id;
pub mod mesh;
pub mod point;
pub mod point_set;
pub mod traits;

pub use error::*;
pub use id::*;
pub use mesh::*;
pub use point::*;
pub use point_set::*;
pub use traits::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};
