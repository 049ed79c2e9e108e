pub mod embedding;
pub mod error;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{PlanumError, Result};
