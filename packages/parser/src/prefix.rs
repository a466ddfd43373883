//! Prefix to postfix conversion

use crate::error::{ParseError, ParseResult};
use crate::stack::Stack;
use crate::tokenizer::{SpannedToken, Token};
use tracing::trace;

/// Convert a prefix token sequence to postfix order.
///
/// Scans right to left, keeping partial postfix sequences on the stack. For an
/// operator the first pop is its left operand and the second its right operand.
pub fn prefix_to_postfix<'src>(
    tokens: &[SpannedToken<'src>],
) -> ParseResult<Vec<SpannedToken<'src>>> {
    let mut stack: Stack<Vec<SpannedToken<'src>>> = Stack::new();

    for token in tokens.iter().rev() {
        match token.token {
            Token::Operator(_) => {
                // Right-to-left scan: the most recent item is the left operand
                let Some((right, mut left)) = stack.pop_pair() else {
                    return Err(ParseError::InvalidPrefixExpression {
                        span: Some(token.span),
                    });
                };
                left.extend(right);
                left.push(*token);
                stack.push(left);
            }
            Token::Number(_) => stack.push(vec![*token]),
            Token::LeftParen | Token::RightParen => {
                return Err(ParseError::UnexpectedParenthesis { span: token.span });
            }
            Token::Unsupported(symbol) => {
                return Err(ParseError::unsupported_operator(symbol, token.span));
            }
            Token::Unknown(lexeme) => {
                return Err(ParseError::invalid_operand(lexeme, token.span));
            }
        }
    }

    let postfix = stack.into_single().map_err(|remaining| {
        trace!(remaining, "Prefix scan did not reduce to one expression");
        ParseError::InvalidPrefixExpression { span: None }
    })?;

    trace!(input = tokens.len(), output = postfix.len(), "Converted prefix to postfix");
    Ok(postfix)
}
