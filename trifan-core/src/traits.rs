//! Capability ports for the triangulation service

use crate::error::Result;
use crate::id::PointSetId;
use crate::mesh::Triangle;

/// Outcome of a triangulation engine run.
///
/// An engine may hand back a complete mesh payload or a raw triangle
/// list; the service encodes only when it receives the raw form.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    /// A mesh payload already in wire form, returned to the caller as-is.
    Encoded(Vec<u8>),
    /// Triangles referencing the input point set, not yet encoded.
    Raw(Vec<Triangle>),
}

/// Trait for fetching wire-encoded point sets by id
pub trait PointSetSource {
    /// Fetch the point-set payload stored under `id`.
    fn fetch_point_set(&self, id: &PointSetId) -> Result<Vec<u8>>;
}

/// Trait for triangulating a wire-encoded point set
pub trait TriangulationEngine {
    /// Triangulate the point set carried by `payload`.
    fn triangulate(&self, payload: &[u8]) -> Result<EngineOutput>;
}
