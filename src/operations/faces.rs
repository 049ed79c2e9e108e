use crate::embedding::{Embedding, RotationSystem};
use crate::error::{Result, TopologyError};

/// A face boundary: a closed walk of 0-based vertex indices.
///
/// The walk length equals the number of darts on the boundary; the closing
/// edge back to the first vertex is implied, not repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub vertices: Vec<usize>,
}

impl Face {
    /// Number of darts on the boundary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Sorts rotations, indexes darts, and traces every face of the embedding.
///
/// The full pipeline: neighbour lists are reordered in place by polar angle,
/// the reverse-slot table is built, and the rotation system is walked into
/// closed face boundaries.
///
/// # Errors
///
/// Returns [`crate::error::GeometryError::CoincidentPoints`] for degenerate
/// coordinates, [`TopologyError::InconsistentAdjacency`] for an asymmetric
/// neighbour list, and [`TopologyError::FaceCountMismatch`] if the trace
/// disagrees with Euler's formula.
pub fn find_faces(embedding: &mut Embedding) -> Result<Vec<Face>> {
    embedding.sort_rotations()?;
    let rotation = RotationSystem::build(embedding)?;
    Ok(trace_faces(embedding, &rotation)?)
}

/// Traces all faces of an embedding whose rotations are already sorted.
///
/// Scans darts `(vertex, slot)` in ascending order, starting a new boundary
/// walk at each unvisited dart, and stops scanning once Euler's formula
/// `F = E - V + 2` is met. Every dart belongs to exactly one face; the two
/// darts of a bridge edge land on the same boundary.
///
/// # Errors
///
/// Returns [`TopologyError::FaceCountMismatch`] if the scan produces a face
/// count other than `E - V + 2` or leaves darts untraced, which signals a
/// disconnected or non-simple input.
pub fn trace_faces(
    embedding: &Embedding,
    rotation: &RotationSystem,
) -> std::result::Result<Vec<Face>, TopologyError> {
    let expected = embedding.face_count();
    let mut visited = vec![false; rotation.dart_count()];
    let mut faces: Vec<Face> = Vec::with_capacity(expected);

    'scan: for start_vertex in 0..embedding.vertex_count() {
        for start_slot in 0..embedding.degree(start_vertex) {
            if faces.len() >= expected {
                break 'scan;
            }
            if visited[rotation.dart(start_vertex, start_slot)] {
                continue;
            }
            faces.push(trace_one_face(
                embedding,
                rotation,
                &mut visited,
                start_vertex,
                start_slot,
            ));
        }
    }

    let unvisited = visited.iter().filter(|&&seen| !seen).count();
    if faces.len() != expected || unvisited != 0 {
        return Err(TopologyError::FaceCountMismatch {
            expected,
            found: faces.len(),
            unvisited,
        });
    }
    Ok(faces)
}

/// Walks one face boundary using the next-edge-in-rotation rule: follow the
/// current dart to its destination, locate the reverse dart there, and
/// continue with the slot after it in the destination's rotation.
fn trace_one_face(
    embedding: &Embedding,
    rotation: &RotationSystem,
    visited: &mut [bool],
    start_vertex: usize,
    start_slot: usize,
) -> Face {
    let mut walk = Vec::new();
    let mut vertex = start_vertex;
    let mut slot = start_slot;

    loop {
        visited[rotation.dart(vertex, slot)] = true;
        walk.push(vertex);

        let dest = embedding.neighbour(vertex, slot);
        let back = rotation.reverse_slot(rotation.dart(vertex, slot));
        vertex = dest;
        slot = (back + 1) % embedding.degree(dest);

        if vertex == start_vertex && slot == start_slot {
            break;
        }
    }

    Face { vertices: walk }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::embedding::Vertex;
    use crate::math::Point2;

    fn embedding(points: &[(f64, f64)], adjacency: &[&[usize]], edges: usize) -> Embedding {
        let vertices = points
            .iter()
            .zip(adjacency)
            .map(|(&(x, y), rotation)| Vertex::new(Point2::new(x, y), rotation.to_vec()))
            .collect();
        Embedding::from_parts(vertices, edges).unwrap()
    }

    fn triangle() -> Embedding {
        embedding(
            &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
            &[&[1, 2], &[0, 2], &[0, 1]],
            3,
        )
    }

    #[test]
    fn triangle_has_two_faces_of_size_three() {
        let mut embedding = triangle();
        let faces = find_faces(&mut embedding).unwrap();
        assert_eq!(faces.len(), 2);
        assert!(faces.iter().all(|face| face.len() == 3));
        let dart_total: usize = faces.iter().map(Face::len).sum();
        assert_eq!(dart_total, 2 * embedding.edge_count());
    }

    #[test]
    fn square_cycle_has_two_faces_of_size_four() {
        let mut embedding = embedding(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            &[&[1, 3], &[0, 2], &[1, 3], &[2, 0]],
            4,
        );
        let faces = find_faces(&mut embedding).unwrap();
        assert_eq!(faces.len(), 2);
        assert!(faces.iter().all(|face| face.len() == 4));
        let dart_total: usize = faces.iter().map(Face::len).sum();
        assert_eq!(dart_total, 8);
    }

    #[test]
    fn complete_graph_on_four_vertices() {
        // K4 drawn with vertex 3 inside the outer triangle: E = 6, F = 4.
        let mut embedding = embedding(
            &[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (2.0, 1.0)],
            &[
                &[1, 2, 3],
                &[0, 2, 3],
                &[0, 1, 3],
                &[0, 1, 2],
            ],
            6,
        );
        let faces = find_faces(&mut embedding).unwrap();
        assert_eq!(faces.len(), 4);
        let dart_total: usize = faces.iter().map(Face::len).sum();
        assert_eq!(dart_total, 12);
    }

    #[test]
    fn bridge_edge_bounds_a_single_face_twice() {
        // A lone segment: both darts of the bridge belong to the one face.
        let mut embedding = embedding(&[(0.0, 0.0), (1.0, 0.0)], &[&[1], &[0]], 1);
        let faces = find_faces(&mut embedding).unwrap();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].vertices, vec![0, 1]);
    }

    #[test]
    fn every_dart_lies_on_exactly_one_face() {
        let mut embedding = triangle();
        embedding.sort_rotations().unwrap();
        let rotation = RotationSystem::build(&embedding).unwrap();
        let faces = trace_faces(&embedding, &rotation).unwrap();

        let mut dart_uses = vec![0_usize; rotation.dart_count()];
        for face in &faces {
            for (position, &vertex) in face.vertices.iter().enumerate() {
                let next = face.vertices[(position + 1) % face.vertices.len()];
                let slot = embedding.vertices()[vertex]
                    .rotation
                    .iter()
                    .position(|&n| n == next)
                    .unwrap();
                dart_uses[rotation.dart(vertex, slot)] += 1;
            }
        }
        assert!(dart_uses.iter().all(|&uses| uses == 1));
    }

    #[test]
    fn trace_is_deterministic_and_idempotent() {
        let mut first = triangle();
        let mut second = triangle();
        let once = find_faces(&mut first).unwrap();
        let again = find_faces(&mut second).unwrap();
        assert_eq!(once, again);

        // Re-running on the already-sorted embedding changes nothing either.
        let repeat = find_faces(&mut first).unwrap();
        assert_eq!(once, repeat);
    }

    #[test]
    fn trace_reports_topology_errors_directly() {
        // Calling the tracer on its own (no pipeline wrapper) yields the
        // bare topology error for a disconnected input.
        let mut embedding = embedding(
            &[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (6.0, 0.0)],
            &[&[1], &[0], &[3], &[2]],
            2,
        );
        embedding.sort_rotations().unwrap();
        let rotation = RotationSystem::build(&embedding).unwrap();
        let result: std::result::Result<Vec<Face>, TopologyError> =
            trace_faces(&embedding, &rotation);
        assert!(matches!(
            result,
            Err(TopologyError::FaceCountMismatch {
                expected: 0,
                found: 0,
                unvisited: 4
            })
        ));
    }

    #[test]
    fn asymmetric_adjacency_is_rejected() {
        // Vertex 0 lists vertex 2, but vertex 2 does not list vertex 0.
        let mut embedding = embedding(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
            &[&[1, 2], &[0, 2], &[1]],
            2,
        );
        let result = find_faces(&mut embedding);
        assert!(matches!(
            result,
            Err(crate::error::PlanumError::Topology(
                TopologyError::InconsistentAdjacency { from: 0, to: 2 }
            ))
        ));
    }

    #[test]
    fn disconnected_graph_fails_the_euler_check() {
        // Two separate triangles: V = 6, E = 6, Euler predicts 2 faces but
        // each component alone contributes 2.
        let mut embedding = embedding(
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (0.0, 1.0),
                (10.0, 0.0),
                (11.0, 0.0),
                (10.0, 1.0),
            ],
            &[&[1, 2], &[0, 2], &[0, 1], &[4, 5], &[3, 5], &[3, 4]],
            6,
        );
        let result = find_faces(&mut embedding);
        assert!(matches!(
            result,
            Err(crate::error::PlanumError::Topology(
                TopologyError::FaceCountMismatch {
                    expected: 2,
                    found: 2,
                    unvisited: 6
                }
            ))
        ));
    }
}
