//! Tour re-evaluation and consistency checks.

mod evaluator;

pub use evaluator::{TourEvaluator, TourViolation};
