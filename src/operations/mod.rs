mod bisect;
mod evaluate;

pub use bisect::{BisectionResult, BisectionStep};
pub use evaluate::{Evaluate, Evaluation, Volume};
