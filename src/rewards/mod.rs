pub mod evaluator;
pub mod catalog;

pub use evaluator::RewardEvaluator;
pub use catalog::{load_catalog, validate_catalog};
