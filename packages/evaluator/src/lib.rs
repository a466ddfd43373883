pub mod evaluator;

pub use evaluator::{evaluate_postfix, EvalError, EvalResult};
