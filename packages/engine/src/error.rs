use pda_evaluator::EvalError;
use pda_parser::{ParseError, TokenSpan, UnknownNotation};
use thiserror::Error;

/// Any failure of a single engine invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Notation(#[from] UnknownNotation),
}

impl EngineError {
    /// Location of the offending token in the input, when there is one
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            EngineError::Parse(err) => err.span(),
            EngineError::Eval(err) => err.span(),
            EngineError::Notation(_) => None,
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
