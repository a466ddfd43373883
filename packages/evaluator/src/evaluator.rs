//! # PDA Evaluator
//!
//! Reduces a postfix token sequence to a single number with an operand stack.
//!
//! ## Operand order
//!
//! For every operator the first pop is the right-hand operand `b` and the
//! second pop is the left-hand operand `a`, so `10 3 -` is `10 - 3`.
//!
//! ## Failure
//!
//! Evaluation stops at the first error. Division checks for a zero divisor
//! before dividing, so a successful result is never produced by `x / 0`.
//! Results that overflow to infinity are returned as-is.
//!
//! ## Usage
//!
//! ```rust
//! use pda_evaluator::evaluate_postfix;
//! use pda_parser::tokenize;
//!
//! let value = evaluate_postfix(&tokenize("2 3 4 * +")).unwrap();
//! assert_eq!(value, 14.0);
//! ```

use pda_parser::{Operator, SpannedToken, Stack, Token, TokenSpan};
use thiserror::Error;
use tracing::trace;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid Expression for Calculation")]
    InvalidExpressionForCalculation { span: TokenSpan },

    #[error("Division by Zero")]
    DivisionByZero { span: TokenSpan },

    #[error("Unknown Operator '{symbol}'")]
    UnknownOperator { symbol: String, span: TokenSpan },

    #[error("Invalid Operand '{lexeme}'")]
    InvalidOperand { lexeme: String, span: TokenSpan },

    #[error("Unexpected Parenthesis")]
    UnexpectedParenthesis { span: TokenSpan },

    #[error("Calculation Error")]
    CalculationError { remaining: usize },
}

impl EvalError {
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            EvalError::InvalidExpressionForCalculation { span } => Some(*span),
            EvalError::DivisionByZero { span } => Some(*span),
            EvalError::UnknownOperator { span, .. } => Some(*span),
            EvalError::InvalidOperand { span, .. } => Some(*span),
            EvalError::UnexpectedParenthesis { span } => Some(*span),
            EvalError::CalculationError { .. } => None,
        }
    }
}

/// Evaluate a postfix token sequence
pub fn evaluate_postfix(tokens: &[SpannedToken<'_>]) -> EvalResult<f64> {
    let mut stack: Stack<f64> = Stack::new();

    for token in tokens {
        match token.token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                let (a, b) = stack
                    .pop_pair()
                    .ok_or(EvalError::InvalidExpressionForCalculation { span: token.span })?;
                let result = apply(op, a, b, token.span)?;
                trace!(%op, a, b, result, "Reduced operator");
                stack.push(result);
            }
            Token::Unsupported(symbol) => {
                return Err(EvalError::UnknownOperator {
                    symbol: symbol.to_string(),
                    span: token.span,
                });
            }
            Token::Unknown(lexeme) => {
                return Err(EvalError::InvalidOperand {
                    lexeme: lexeme.to_string(),
                    span: token.span,
                });
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnexpectedParenthesis { span: token.span });
            }
        }
    }

    stack
        .into_single()
        .map_err(|remaining| EvalError::CalculationError { remaining })
}

fn apply(op: Operator, a: f64, b: f64, span: TokenSpan) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { span });
            }
            Ok(a / b)
        }
    }
}
