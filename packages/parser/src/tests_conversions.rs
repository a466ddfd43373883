//! Conversions across all three notations

use crate::*;

/// Each case is the same expression written as (infix, postfix, prefix, rendered infix)
const CASES: &[(&str, &str, &str, &str)] = &[
    ("1 + 2", "1 2 +", "+ 1 2", "(1 + 2)"),
    ("2 + 3 * 4", "2 3 4 * +", "+ 2 * 3 4", "(2 + (3 * 4))"),
    ("10 - 3 - 2", "10 3 - 2 -", "- - 10 3 2", "((10 - 3) - 2)"),
    ("(10 + 20) * 5", "10 20 + 5 *", "* + 10 20 5", "((10 + 20) * 5)"),
    ("8 / (4 - 2)", "8 4 2 - /", "/ 8 - 4 2", "(8 / (4 - 2))"),
    (
        "(1 + 2) * (3 - 4) / 5",
        "1 2 + 3 4 - * 5 /",
        "/ * + 1 2 - 3 4 5",
        "(((1 + 2) * (3 - 4)) / 5)",
    ),
];

fn convert(source: &str, from: Notation, to: Notation) -> ParseResult<String> {
    let tokens = tokenize(source);
    let postfix = to_postfix(&tokens, from)?;
    render(&postfix, to)
}

#[test]
fn test_every_notation_pair() {
    for (infix, postfix, prefix, rendered_infix) in CASES {
        let sources = [
            (Notation::Infix, *infix),
            (Notation::Postfix, *postfix),
            (Notation::Prefix, *prefix),
        ];

        for (from, source) in sources {
            assert_eq!(
                convert(source, from, Notation::Postfix).unwrap(),
                *postfix,
                "{} '{}' -> postfix",
                from,
                source
            );
            assert_eq!(
                convert(source, from, Notation::Prefix).unwrap(),
                *prefix,
                "{} '{}' -> prefix",
                from,
                source
            );
            assert_eq!(
                convert(source, from, Notation::Infix).unwrap(),
                *rendered_infix,
                "{} '{}' -> infix",
                from,
                source
            );
        }
    }
}

#[test]
fn test_rendered_infix_converts_back() {
    for (_, postfix, _, rendered_infix) in CASES {
        assert_eq!(
            convert(rendered_infix, Notation::Infix, Notation::Postfix).unwrap(),
            *postfix
        );
    }
}

#[test]
fn test_postfix_passthrough_keeps_spelling() {
    assert_eq!(
        convert("  3.50   2 *", Notation::Postfix, Notation::Postfix).unwrap(),
        "3.50 2 *"
    );
}

#[test]
fn test_compact_input() {
    assert_eq!(
        convert("(1+2)*3", Notation::Infix, Notation::Prefix).unwrap(),
        "* + 1 2 3"
    );
    assert_eq!(
        convert("+1*2 3", Notation::Prefix, Notation::Infix).unwrap(),
        "(1 + (2 * 3))"
    );
}

#[test]
fn test_first_error_wins() {
    // Normalization fails before rendering is attempted
    let err = convert("(1 + 2", Notation::Infix, Notation::Infix).unwrap_err();
    assert!(matches!(err, ParseError::MismatchedParentheses { .. }));

    let err = convert("+ 1", Notation::Prefix, Notation::Infix).unwrap_err();
    assert!(matches!(err, ParseError::InvalidPrefixExpression { .. }));

    let err = convert("1 2 3 +", Notation::Postfix, Notation::Prefix).unwrap_err();
    assert_eq!(err, ParseError::InvalidExpression { remaining: 2 });
}
