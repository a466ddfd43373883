pub mod batch;
pub mod convert;
pub mod init;
pub mod validate;

pub use batch::{batch, BatchArgs};
pub use convert::{convert, ConvertArgs};
pub use init::{init, InitArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::Result;
use pda_engine::EngineError;
use pda_parser::error::format_report;

/// Blank input never reaches the engine
pub(crate) fn ensure_expression(expression: &str) -> Result<()> {
    if expression.trim().is_empty() {
        anyhow::bail!("Expression is empty");
    }
    Ok(())
}

/// Render an engine error against the expression it came from
pub(crate) fn report(expression: &str, err: &EngineError) -> String {
    format_report(expression, "<expression>", &err.to_string(), err.span())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_expression() {
        assert!(ensure_expression("1 + 2").is_ok());
        assert!(ensure_expression("").is_err());
        assert!(ensure_expression(" \t\u{a0}").is_err());
    }
}
