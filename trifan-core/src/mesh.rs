//! Mesh data structures and functionality

use crate::point_set::PointSet;
use serde::{Deserialize, Serialize};

/// A triangle as an ordered triple of vertex indices into a point set
pub type Triangle = [u32; 3];

/// A triangulated point set: points plus index triples referencing them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub points: PointSet,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            points: PointSet::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh from a point set and its triangles
    pub fn from_points_and_triangles(points: PointSet, triangles: Vec<Triangle>) -> Self {
        Self { points, triangles }
    }

    /// Get the number of points
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.triangles.is_empty()
    }

    /// Check that every triangle index references an existing point
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.points.len();
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&idx| (idx as usize) < n))
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2f;

    fn square_mesh() -> Mesh {
        let points = PointSet::from_points(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 0.0),
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 1.0),
        ]);
        Mesh::from_points_and_triangles(points, vec![[0, 1, 2], [0, 2, 3]])
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = square_mesh();
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_indices_in_bounds() {
        let mut mesh = square_mesh();
        assert!(mesh.indices_in_bounds());

        mesh.triangles.push([0, 1, 4]);
        assert!(!mesh.indices_in_bounds());
    }
}
