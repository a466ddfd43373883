//! Operator precedence table

/// Precedence class of an operator symbol.
///
/// Higher binds tighter. Total over all strings: anything that is not one of
/// `+ - * /` (parentheses included) has precedence 0.
pub fn precedence(symbol: &str) -> u8 {
    match symbol {
        "+" | "-" => 1,
        "*" | "/" => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Operator;

    #[test]
    fn test_table() {
        assert_eq!(precedence("+"), 1);
        assert_eq!(precedence("-"), 1);
        assert_eq!(precedence("*"), 2);
        assert_eq!(precedence("/"), 2);
    }

    #[test]
    fn test_everything_else_is_zero() {
        for symbol in ["^", "(", ")", "", "10", "**", "%"] {
            assert_eq!(precedence(symbol), 0, "symbol {:?}", symbol);
        }
    }

    #[test]
    fn test_operator_uses_table() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Div.precedence(), Operator::Mul.precedence());
        assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    }
}
