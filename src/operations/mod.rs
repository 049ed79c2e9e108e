pub mod faces;

pub use faces::{find_faces, trace_faces, Face};
