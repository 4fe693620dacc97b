//! Request orchestration over the capability ports

use log::debug;
use trifan_algorithms::FanTriangulator;
use trifan_core::{EngineOutput, Error, PointSetId, PointSetSource, Result, TriangulationEngine};
use trifan_wire::{decode_point_set, encode_mesh};

/// Orchestrates one triangulation request: fetch, triangulate, encode.
///
/// Both collaborators are injected at construction. A service without a
/// configured source is usable but reports every request as upstream
/// unavailability; it never dereferences a missing dependency.
pub struct TriangulationService {
    source: Option<Box<dyn PointSetSource>>,
    engine: Box<dyn TriangulationEngine>,
}

impl TriangulationService {
    /// Create a service from an optional source and an engine
    pub fn new(source: Option<Box<dyn PointSetSource>>, engine: Box<dyn TriangulationEngine>) -> Self {
        Self { source, engine }
    }

    /// Create a service backed by the built-in fan triangulation engine
    pub fn with_fan_engine(source: Option<Box<dyn PointSetSource>>) -> Self {
        Self::new(source, Box::new(FanTriangulator::new()))
    }

    /// Fetch the point set stored under `id` and return its triangulated
    /// mesh in wire form.
    pub fn handle(&self, id: &PointSetId) -> Result<Vec<u8>> {
        let source = self.source.as_deref().ok_or_else(|| {
            Error::PointSetManagerUnavailable("No point set source configured".to_string())
        })?;

        let payload = source.fetch_point_set(id)?;
        debug!("Fetched {} payload bytes for point set {id}", payload.len());

        match self.engine.triangulate(&payload)? {
            EngineOutput::Encoded(bytes) => Ok(bytes),
            EngineOutput::Raw(triangles) => {
                let points = decode_point_set(&payload)?;
                encode_mesh(&points, &triangles)
            }
        }
    }
}
