//! # trifan algorithms
//!
//! Point-set validation and fan triangulation.
//!
//! The triangulator connects vertex 0 to every other edge of the input
//! ordering. It is correct for point orderings that are convex or
//! star-shaped as seen from vertex 0, and it deliberately stays that
//! way; general polygon or point-cloud triangulation is out of scope.

pub mod engine;
pub mod fan;

pub use engine::*;
pub use fan::*;
