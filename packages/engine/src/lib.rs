//! # PDA Engine
//!
//! Converts arithmetic expressions between infix, postfix and prefix notation
//! and evaluates them. Any source notation is normalized to postfix first; the
//! postfix sequence is then rendered in the target notation and evaluated.
//!
//! ```rust
//! use pda_engine::{process, Notation, ProcessResult};
//!
//! let result = process("(10 + 20) * 5", Notation::Infix, Notation::Postfix);
//! assert_eq!(
//!     result,
//!     ProcessResult::Success { converted: "10 20 + 5 *".to_string(), value: 150.0 }
//! );
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod result;

pub use engine::{convert, process, process_named, try_process, validate};
pub use error::{EngineError, EngineResult};
pub use format::format_value;
pub use result::{Conversion, ProcessResult};

pub use pda_evaluator::EvalError;
pub use pda_parser::{Notation, ParseError, TokenSpan, UnknownNotation};
