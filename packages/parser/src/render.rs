//! Rendering a postfix sequence as infix or prefix text

use crate::error::{ParseError, ParseResult};
use crate::stack::Stack;
use crate::tokenizer::{Operator, SpannedToken, Token};
use tracing::trace;

/// Render postfix as a fully parenthesized infix expression, e.g. `(1 + 2)`
pub fn postfix_to_infix(tokens: &[SpannedToken<'_>]) -> ParseResult<String> {
    render_postfix(tokens, |op, a, b| format!("({} {} {})", a, op, b))
}

/// Render postfix as a prefix expression, e.g. `+ 1 2`
pub fn postfix_to_prefix(tokens: &[SpannedToken<'_>]) -> ParseResult<String> {
    render_postfix(tokens, |op, a, b| format!("{} {} {}", op, a, b))
}

fn render_postfix<F>(tokens: &[SpannedToken<'_>], combine: F) -> ParseResult<String>
where
    F: Fn(Operator, &str, &str) -> String,
{
    let mut stack: Stack<String> = Stack::new();

    for token in tokens {
        match token.token {
            Token::Number(_) => stack.push(token.lexeme.to_string()),
            Token::Operator(op) => {
                let (a, b) = stack
                    .pop_pair()
                    .ok_or(ParseError::InvalidPostfixExpression { span: token.span })?;
                stack.push(combine(op, &a, &b));
            }
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

    stack.into_single().map_err(|remaining| {
        trace!(remaining, "Postfix did not reduce to one expression");
        ParseError::InvalidExpression { remaining }
    })
}
