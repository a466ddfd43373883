//! Error types for notation conversion

use crate::tokenizer::TokenSpan;
use thiserror::Error;

/// Result type for conversion operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Conversion error with location and context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Mismatched Parentheses")]
    MismatchedParentheses { span: TokenSpan },

    #[error("Invalid Prefix Expression")]
    InvalidPrefixExpression { span: Option<TokenSpan> },

    #[error("Invalid Postfix Expression")]
    InvalidPostfixExpression { span: TokenSpan },

    #[error("Invalid Expression")]
    InvalidExpression { remaining: usize },

    #[error("Unsupported Operator '{symbol}'")]
    UnsupportedOperator { symbol: String, span: TokenSpan },

    #[error("Invalid Operand '{lexeme}'")]
    InvalidOperand { lexeme: String, span: TokenSpan },

    #[error("Unexpected Parenthesis")]
    UnexpectedParenthesis { span: TokenSpan },
}

impl ParseError {
    pub fn unsupported_operator(symbol: impl Into<String>, span: TokenSpan) -> Self {
        Self::UnsupportedOperator {
            symbol: symbol.into(),
            span,
        }
    }

    pub fn invalid_operand(lexeme: impl Into<String>, span: TokenSpan) -> Self {
        Self::InvalidOperand {
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            ParseError::MismatchedParentheses { span } => Some(*span),
            ParseError::InvalidPrefixExpression { span } => *span,
            ParseError::InvalidPostfixExpression { span } => Some(*span),
            ParseError::InvalidExpression { .. } => None,
            ParseError::UnsupportedOperator { span, .. } => Some(*span),
            ParseError::InvalidOperand { span, .. } => Some(*span),
            ParseError::UnexpectedParenthesis { span } => Some(*span),
        }
    }
}

/// Pretty-print an error with source context using ariadne.
///
/// Errors without a span point at the end of the input.
#[cfg(feature = "pretty-errors")]
pub fn format_report(
    source: &str,
    filename: &str,
    message: &str,
    span: Option<TokenSpan>,
) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    // ariadne counts characters, token spans count bytes
    let (start, end) = match span {
        Some(span) => (char_offset(source, span.start), char_offset(source, span.end)),
        None => {
            let end = source.chars().count();
            (end.saturating_sub(1), end)
        }
    };

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, filename, start)
        .with_message(message)
        .with_label(
            Label::new((filename, start..end))
                .with_color(Color::Red)
                .with_message(message),
        )
        .finish();

    if report
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        return message.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| message.to_string())
}

#[cfg(feature = "pretty-errors")]
fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}
