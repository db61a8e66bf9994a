use serde_json::Value;

/// Render a backend value on one line for tables.
///
/// Whole-valued floats drop the fractional part (`10.0` -> `10`), nested
/// objects are shown as `{k: v, ...}` and null as an empty cell.
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => {
            let parts: Vec<String> = obj
                .iter()
                .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        Value::Null => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(value_to_short_string(&json!("MERCEARIA")), "MERCEARIA");
        assert_eq!(value_to_short_string(&json!(4.99)), "4.99");
        assert_eq!(value_to_short_string(&json!(10.0)), "10");
        assert_eq!(value_to_short_string(&json!(null)), "");
    }

    #[test]
    fn nested_values() {
        assert_eq!(value_to_short_string(&json!(["a", 1])), "a, 1");
        assert_eq!(value_to_short_string(&json!({"inicio": "08:00"})), "{inicio: 08:00}");
    }
}
