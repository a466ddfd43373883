//! Infix to postfix conversion (shunting-yard)

use crate::error::{ParseError, ParseResult};
use crate::stack::Stack;
use crate::tokenizer::{SpannedToken, Token};
use tracing::trace;

/// Convert an infix token sequence to postfix order.
///
/// Operators of equal precedence pop each other, which makes every operator
/// left-associative. Operand/operator ordering is not checked here; a
/// malformed sequence surfaces when the postfix output is rendered or evaluated.
pub fn infix_to_postfix<'src>(
    tokens: &[SpannedToken<'src>],
) -> ParseResult<Vec<SpannedToken<'src>>> {
    let mut stack: Stack<SpannedToken<'src>> = Stack::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.token {
            Token::Number(_) => output.push(*token),
            Token::LeftParen => stack.push(*token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.token == Token::LeftParen => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(ParseError::MismatchedParentheses { span: token.span });
                    }
                }
            },
            Token::Operator(op) => {
                while let Some(top) = stack.peek() {
                    let Token::Operator(top_op) = top.token else {
                        break;
                    };
                    if top_op.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(*token);
            }
            Token::Unsupported(symbol) => {
                return Err(ParseError::unsupported_operator(symbol, token.span));
            }
            Token::Unknown(lexeme) => {
                return Err(ParseError::invalid_operand(lexeme, token.span));
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.token == Token::LeftParen {
            return Err(ParseError::MismatchedParentheses { span: top.span });
        }
        output.push(top);
    }

    trace!(input = tokens.len(), output = output.len(), "Converted infix to postfix");
    Ok(output)
}
