pub mod rotation;

pub use rotation::RotationSystem;

use crate::error::TopologyError;
use crate::math::Point2;

/// A vertex of the embedded graph: its position in the plane and its
/// rotation, the ordered list of neighbour indices.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Neighbour indices in rotation order. Insertion order until
    /// [`Embedding::sort_rotations`] runs, ascending polar angle afterwards.
    pub rotation: Vec<usize>,
}

impl Vertex {
    /// Creates a vertex at the given point with the given neighbour list.
    #[must_use]
    pub fn new(point: Point2, rotation: Vec<usize>) -> Self {
        Self { point, rotation }
    }
}

/// A straight-line embedding of a connected planar graph.
///
/// Vertices are addressed by dense 0-based indices. The structure is built
/// once and never resized; the only later mutation is the in-place
/// reordering of rotations by [`Embedding::sort_rotations`].
#[derive(Debug, Clone)]
pub struct Embedding {
    vertices: Vec<Vertex>,
    edge_count: usize,
}

impl Embedding {
    /// Builds an embedding from its vertex array and undirected edge count.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NeighbourOutOfRange`] if any rotation entry
    /// refers to a vertex outside the array.
    pub fn from_parts(vertices: Vec<Vertex>, edge_count: usize) -> Result<Self, TopologyError> {
        let count = vertices.len();
        for (index, vertex) in vertices.iter().enumerate() {
            if let Some(&neighbour) = vertex.rotation.iter().find(|&&n| n >= count) {
                return Err(TopologyError::NeighbourOutOfRange {
                    vertex: index,
                    neighbour,
                    count,
                });
            }
        }
        Ok(Self {
            vertices,
            edge_count,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of faces predicted by Euler's formula for a connected planar
    /// graph, `E - V + 2`, counting the unbounded outer face.
    ///
    /// Saturates at zero when `E + 2 < V`; that cannot happen for a
    /// connected graph, and the face trace reports the discrepancy.
    #[must_use]
    pub fn face_count(&self) -> usize {
        (self.edge_count + 2).saturating_sub(self.vertices.len())
    }

    /// All vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Position of vertex `v`.
    #[must_use]
    pub fn point(&self, v: usize) -> Point2 {
        self.vertices[v].point
    }

    /// Degree of vertex `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.vertices[v].rotation.len()
    }

    /// The `slot`-th neighbour of vertex `v` in rotation order.
    #[must_use]
    pub fn neighbour(&self, v: usize, slot: usize) -> usize {
        self.vertices[v].rotation[slot]
    }
}
