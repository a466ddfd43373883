use pda_engine::{format_value, process_named, Notation, ProcessResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_notation(name: &str) -> Result<Notation, JsValue> {
    name.parse::<Notation>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert and evaluate an expression.
///
/// Returns `{"status":"success","converted":..,"value":..}` or
/// `{"status":"error","message":..}` as JSON.
#[wasm_bindgen(js_name = processExpression)]
pub fn process_expression_js(input: &str, from: &str, to: &str) -> String {
    let result = process_named(input, from, to);
    serde_json::to_string(&result).unwrap_or_else(|e| {
        let fallback = ProcessResult::Error {
            message: format!("Serialization error: {}", e),
        };
        serde_json::to_string(&fallback).unwrap_or_default()
    })
}

/// Convert an expression without evaluating it
#[wasm_bindgen(js_name = convertExpression)]
pub fn convert_expression_js(input: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let from = parse_notation(from)?;
    let to = parse_notation(to)?;

    pda_engine::convert(input, from, to).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check that an expression can be normalized from the given notation
#[wasm_bindgen(js_name = validateExpression)]
pub fn validate_expression_js(input: &str, notation: &str) -> bool {
    match notation.parse::<Notation>() {
        Ok(notation) => pda_engine::validate(input, notation),
        Err(_) => false,
    }
}

/// Display form of a computed value, e.g. `0.3333`
#[wasm_bindgen(js_name = formatValue)]
pub fn format_value_js(value: f64) -> String {
    format_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_success_json() {
        let json = process_expression_js("(10+20)*5", "infix", "postfix");
        let result: ProcessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(
            result,
            ProcessResult::Success {
                converted: "10 20 + 5 *".to_string(),
                value: 150.0
            }
        );
    }

    #[test]
    fn test_process_error_json() {
        let json = process_expression_js("8 0 /", "postfix", "infix");
        assert_eq!(json, r#"{"status":"error","message":"Division by Zero"}"#);
    }

    #[test]
    fn test_process_unknown_notation() {
        let json = process_expression_js("1 2 +", "postfix", "binary");
        assert!(json.contains("Unknown Notation 'binary'"));
    }

    #[test]
    fn test_convert() {
        let converted = convert_expression_js("+ 1 2", "prefix", "infix");
        assert!(converted.is_ok());
        assert_eq!(converted.unwrap(), "(1 + 2)");
    }

    #[test]
    fn test_validate() {
        assert!(validate_expression_js("1 + 2", "infix"));
        assert!(!validate_expression_js("(1 + 2", "infix"));
        assert!(!validate_expression_js("1 + 2", "sideways"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value_js(14.0), "14");
        assert_eq!(format_value_js(1.0 / 3.0), "0.3333");
    }
}
