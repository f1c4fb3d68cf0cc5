// Request field handling for the suggestion endpoints.
// Callers send free-form JSON, so fields arrive as any JSON value and are
// rendered into prompts the way template-string interpolation would.

use serde_json::Value;

/// False for `null`, `false`, `0` and `""`; true otherwise, empty arrays and objects included.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a field for interpolation into a prompt: strings as-is, arrays
/// comma-joined, objects as `[object Object]`.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Array joins print null holes as empty strings.
                Value::Null => String::new(),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for v in [json!(" "), json!(5), json!(true), json!([]), json!({}), json!("0")] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn test_render_matches_template_interpolation() {
        assert_eq!(render(&json!("arte")), "arte");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(1.5)), "1.5");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!(["arte", "musica"])), "arte,musica");
        assert_eq!(render(&json!(["a", null, 3, ["b", "c"]])), "a,,3,b,c");
        assert_eq!(render(&json!({"k": "v"})), "[object Object]");
    }
}
