use thiserror::Error;

/// Top-level error type for the Planum face enumeration kernel.
#[derive(Debug, Error)]
pub enum PlanumError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coincident points: vertices {a} and {b} share coordinates ({x}, {y}), polar angle is undefined")]
    CoincidentPoints { a: usize, b: usize, x: f64, y: f64 },
}

/// Errors related to the combinatorial structure of the embedding.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("vertex {vertex} lists neighbour {neighbour}, but the embedding has only {count} vertices")]
    NeighbourOutOfRange {
        vertex: usize,
        neighbour: usize,
        count: usize,
    },

    #[error("inconsistent adjacency: vertex {from} lists {to} as a neighbour, but {to} does not list {from}")]
    InconsistentAdjacency { from: usize, to: usize },

    #[error("face count mismatch: Euler's formula gives {expected} faces, trace produced {found} with {unvisited} darts untraced")]
    FaceCountMismatch {
        expected: usize,
        found: usize,
        unvisited: usize,
    },
}

/// Errors raised while parsing the textual embedding format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing header line (expected \"V E\")")]
    MissingHeader,

    #[error("line {line}: expected {expected} tokens, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: vertex indices are 1-based, found 0")]
    ZeroIndex { line: usize },

    #[error("expected {expected} vertex lines, found {found}")]
    VertexLineCount { expected: usize, found: usize },

    #[error("header declares {declared} edges, adjacency lists sum to {actual} darts instead of {}", 2 * .declared)]
    EdgeCountMismatch { declared: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`PlanumError`].
pub type Result<T> = std::result::Result<T, PlanumError>;
