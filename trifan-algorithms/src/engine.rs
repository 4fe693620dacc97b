//! Triangulation engine over wire payloads

use trifan_core::{EngineOutput, Result, TriangulationEngine};
use trifan_wire::decode_point_set;

use crate::fan::triangulate;

/// [`TriangulationEngine`] backed by fan triangulation.
///
/// Decodes the payload, validates the points and returns the raw
/// triangle list; encoding the result is the caller's decision.
#[derive(Debug, Default, Clone, Copy)]
pub struct FanTriangulator;

impl FanTriangulator {
    /// Create a new fan triangulation engine
    pub fn new() -> Self {
        Self
    }
}

impl TriangulationEngine for FanTriangulator {
    fn triangulate(&self, payload: &[u8]) -> Result<EngineOutput> {
        let points = decode_point_set(payload)?;
        let triangles = triangulate(&points)?;
        Ok(EngineOutput::Raw(triangles))
    }
}
