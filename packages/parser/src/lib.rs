//! # PDA Parser
//!
//! Tokenizes arithmetic expressions and converts them between infix, postfix
//! and prefix notation. Postfix is the canonical form: every source notation is
//! first normalized to a postfix token sequence, which is then rendered into the
//! target notation.
//!
//! ```rust
//! use pda_parser::{infix_to_postfix, postfix_to_prefix, tokenize};
//!
//! let tokens = tokenize("(10 + 20) * 5");
//! let postfix = infix_to_postfix(&tokens).unwrap();
//! assert_eq!(postfix_to_prefix(&postfix).unwrap(), "* + 10 20 5");
//! ```

pub mod error;
pub mod infix;
pub mod notation;
pub mod precedence;
pub mod prefix;
pub mod render;
pub mod stack;
pub mod tokenizer;

#[cfg(test)]
mod tests_conversions;

pub use error::{ParseError, ParseResult};
pub use infix::infix_to_postfix;
pub use notation::{Notation, UnknownNotation};
pub use precedence::precedence;
pub use prefix::prefix_to_postfix;
pub use render::{postfix_to_infix, postfix_to_prefix};
pub use stack::Stack;
pub use tokenizer::{tokenize, tokens_to_string, Operator, SpannedToken, Token, TokenSpan};

/// Normalize a token sequence written in `notation` to postfix order.
///
/// Postfix input is returned unchanged; it is validated when rendered or evaluated.
pub fn to_postfix<'src>(
    tokens: &[SpannedToken<'src>],
    notation: Notation,
) -> ParseResult<Vec<SpannedToken<'src>>> {
    match notation {
        Notation::Infix => infix_to_postfix(tokens),
        Notation::Postfix => Ok(tokens.to_vec()),
        Notation::Prefix => prefix_to_postfix(tokens),
    }
}

/// Render a postfix token sequence in `notation`
pub fn render(postfix: &[SpannedToken<'_>], notation: Notation) -> ParseResult<String> {
    match notation {
        Notation::Infix => postfix_to_infix(postfix),
        Notation::Postfix => Ok(tokens_to_string(postfix)),
        Notation::Prefix => postfix_to_prefix(postfix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_basic() {
        let tokens = tokenize("10 + 20");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_postfix_normalization_is_identity() {
        let tokens = tokenize("1 2 + 3 *");
        assert_eq!(to_postfix(&tokens, Notation::Postfix).unwrap(), tokens);
    }
}
