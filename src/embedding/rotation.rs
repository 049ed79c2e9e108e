use crate::error::{GeometryError, TopologyError};
use crate::math::angle_2d::polar_angle;
use crate::math::{Point2, TOLERANCE};

use super::Embedding;

impl Embedding {
    /// Reorders every vertex's rotation into ascending polar-angle order,
    /// realizing the combinatorial embedding induced by the coordinates.
    ///
    /// The sort is stable, so two neighbours on exactly the same ray keep
    /// their relative order (such ties never arise from a valid straight-line
    /// embedding). Already-sorted rotations are left unchanged, making the
    /// operation idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if a vertex shares its
    /// coordinates with one of its neighbours; the polar angle of such an
    /// edge is undefined.
    pub fn sort_rotations(&mut self) -> Result<(), GeometryError> {
        let points: Vec<Point2> = self.vertices.iter().map(|v| v.point).collect();
        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            for &neighbour in &vertex.rotation {
                let separation = points[neighbour] - vertex.point;
                if separation.norm_squared() < TOLERANCE * TOLERANCE {
                    return Err(GeometryError::CoincidentPoints {
                        a: index,
                        b: neighbour,
                        x: vertex.point.x,
                        y: vertex.point.y,
                    });
                }
            }
            let origin = vertex.point;
            vertex.rotation.sort_by(|&a, &b| {
                polar_angle(&origin, &points[a]).total_cmp(&polar_angle(&origin, &points[b]))
            });
        }
        Ok(())
    }
}

/// Flat dart index over an embedding with sorted rotations.
///
/// A dart (directed edge) is addressed by `(vertex, slot)`, where `slot`
/// indexes the vertex's rotation. Darts get dense ids via a prefix-sum
/// `offsets` table; `reverse` holds, for every dart, the slot of the
/// opposite dart within the destination vertex's rotation, precomputed so
/// each face-trace step costs O(1).
#[derive(Debug, Clone)]
pub struct RotationSystem {
    offsets: Vec<usize>,
    reverse: Vec<usize>,
}

impl RotationSystem {
    /// Builds the dart index and reverse-slot table for an embedding.
    ///
    /// This performs the adjacency symmetry check: every dart `u -> v` must
    /// have a matching `v -> u` entry in `v`'s rotation.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InconsistentAdjacency`] naming the offending
    /// vertex pair if a reverse dart is missing.
    pub fn build(embedding: &Embedding) -> Result<Self, TopologyError> {
        let mut offsets = Vec::with_capacity(embedding.vertex_count() + 1);
        let mut total = 0;
        offsets.push(0);
        for vertex in embedding.vertices() {
            total += vertex.rotation.len();
            offsets.push(total);
        }

        let mut reverse = Vec::with_capacity(total);
        for (index, vertex) in embedding.vertices().iter().enumerate() {
            for &neighbour in &vertex.rotation {
                let slot = embedding.vertices()[neighbour]
                    .rotation
                    .iter()
                    .position(|&back| back == index)
                    .ok_or(TopologyError::InconsistentAdjacency {
                        from: index,
                        to: neighbour,
                    })?;
                reverse.push(slot);
            }
        }

        Ok(Self { offsets, reverse })
    }

    /// Dense id of the dart `(vertex, slot)`.
    #[must_use]
    pub fn dart(&self, vertex: usize, slot: usize) -> usize {
        self.offsets[vertex] + slot
    }

    /// Total number of darts, `2E`.
    #[must_use]
    pub fn dart_count(&self) -> usize {
        self.reverse.len()
    }

    /// Slot of the reverse dart within the destination vertex's rotation.
    #[must_use]
    pub fn reverse_slot(&self, dart: usize) -> usize {
        self.reverse[dart]
    }
}
