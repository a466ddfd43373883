//! Tokenizer for arithmetic expressions using logos
//!
//! Tokens are classified once, here. Downstream stages never re-parse lexemes.

use logos::Logos;
use std::fmt;

/// Binary operators understood by every stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn precedence(self) -> u8 {
        crate::precedence::precedence(self.symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Token types for infix, postfix and prefix expressions
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token<'src> {
    // Operands: digits with an optional fraction, or a bare fraction
    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok(), priority = 4)]
    Number(f64),

    // Operators
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),

    // Punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Exponentiation is recognised so it can be rejected with a clear error
    #[token("^", |lex| lex.slice())]
    Unsupported(&'src str),

    // Anything else that is not whitespace or a symbol
    #[regex(r"[^\s()+\-*/^]+", |lex| lex.slice(), priority = 1)]
    Unknown(&'src str),
}

/// Span information for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl From<std::ops::Range<usize>> for TokenSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A token with its span and the exact text it was read from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub span: TokenSpan,
    pub lexeme: &'src str,
}

/// Tokenize a source string.
///
/// Never fails. Input the lexer cannot classify (which the catch-all `Unknown`
/// pattern should already cover) is kept as `Unknown` so that the stage consuming
/// it reports a positioned error.
pub fn tokenize(source: &str) -> Vec<SpannedToken<'_>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| {
            let lexeme = &source[span.clone()];
            SpannedToken {
                token: result.unwrap_or(Token::Unknown(lexeme)),
                span: span.into(),
                lexeme,
            }
        })
        .collect()
}

/// Join token lexemes with single spaces
pub fn tokens_to_string(tokens: &[SpannedToken<'_>]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        tokenize(source).into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(
            kinds("10+20"),
            vec![
                Token::Number(10.0),
                Token::Operator(Operator::Add),
                Token::Number(20.0),
            ]
        );
    }

    #[test]
    fn test_whitespace_discarded() {
        let tokens = tokenize("  ( 10 +\t20 )\n* 5 ");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["(", "10", "+", "20", ")", "*", "5"]);
    }

    #[test]
    fn test_unicode_whitespace_discarded() {
        // No-break space and vertical tab, as found in pasted text
        assert_eq!(
            kinds("1\u{a0}+\u{a0}2"),
            vec![
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
            ]
        );
        let lexemes: Vec<_> = tokenize("1\u{0b}+ 2").iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["1", "+", "2"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_decimal_operands() {
        assert_eq!(kinds("3.25 .5"), vec![Token::Number(3.25), Token::Number(0.5)]);
        // Original spelling is kept for rendering
        assert_eq!(tokenize("10.50")[0].lexeme, "10.50");
    }

    #[test]
    fn test_minus_is_always_an_operator() {
        assert_eq!(
            kinds("-5"),
            vec![Token::Operator(Operator::Sub), Token::Number(5.0)]
        );
    }

    #[test]
    fn test_caret_is_unsupported() {
        assert_eq!(
            kinds("2^3"),
            vec![Token::Number(2.0), Token::Unsupported("^"), Token::Number(3.0)]
        );
    }

    #[test]
    fn test_unknown_lexemes() {
        assert_eq!(kinds("abc"), vec![Token::Unknown("abc")]);
        assert_eq!(kinds("1.2.3"), vec![Token::Unknown("1.2.3")]);
        assert_eq!(kinds("2e5"), vec![Token::Unknown("2e5")]);
        assert_eq!(kinds("x+1")[0], Token::Unknown("x"));
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("12 + 3");
        assert_eq!(tokens[0].span, TokenSpan { start: 0, end: 2 });
        assert_eq!(tokens[1].span, TokenSpan { start: 3, end: 4 });
        assert_eq!(tokens[2].span, TokenSpan { start: 5, end: 6 });
    }

    #[test]
    fn test_tokens_to_string() {
        assert_eq!(tokens_to_string(&tokenize("(1+2)*3")), "( 1 + 2 ) * 3");
        assert_eq!(tokens_to_string(&[]), "");
    }
}
