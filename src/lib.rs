pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TiltglassError};
pub use geometry::Container;
pub use operations::{BisectionResult, BisectionStep, Evaluate, Evaluation, Volume};
