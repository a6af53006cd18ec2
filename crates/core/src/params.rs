//! Lenient typed lookups into a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail, which is what lets [`CanvasConfig::from_json`] accept
//! partial overrides.
//!
//! [`CanvasConfig::from_json`]: crate::config::CanvasConfig::from_json

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Integers are accepted and widened to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts an RGBA color from `params[name]`.
///
/// The value must be an array of exactly four numbers; anything else
/// (wrong length, a non-numeric element) yields `default` as a whole.
pub fn param_rgba(params: &Value, name: &str, default: [f32; 4]) -> [f32; 4] {
    let Some(items) = params.get(name).and_then(Value::as_array) else {
        return default;
    };
    if items.len() != 4 {
        return default;
    }

    let mut rgba = [0.0_f32; 4];
    for (slot, item) in rgba.iter_mut().zip(items) {
        match item.as_f64() {
            Some(v) => *slot = v as f32,
            None => return default,
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"fov_degrees": 60.5});
        assert!((param_f64(&params, "fov_degrees", 45.0) - 60.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"z_far": 250});
        assert!((param_f64(&params, "z_far", 100.0) - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "z_near", 0.1) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"z_near": "close"});
        assert!((param_f64(&params, "z_near", 0.1) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!([1, 2, 3]);
        assert!((param_f64(&params, "z_near", 0.1) - 0.1).abs() < f64::EPSILON);
    }

    // -- param_string --

    #[test]
    fn param_string_extracts_existing_string() {
        let params = json!({"failure_policy": "strict"});
        assert_eq!(param_string(&params, "failure_policy", "best_effort"), "strict");
    }

    #[test]
    fn param_string_returns_default_when_wrong_type() {
        let params = json!({"failure_policy": true});
        assert_eq!(
            param_string(&params, "failure_policy", "best_effort"),
            "best_effort"
        );
    }

    // -- param_rgba --

    #[test]
    fn param_rgba_extracts_four_numbers() {
        let params = json!({"clear_color": [0.25, 0.5, 1, 1]});
        assert_eq!(
            param_rgba(&params, "clear_color", [0.0, 0.0, 0.0, 1.0]),
            [0.25, 0.5, 1.0, 1.0]
        );
    }

    #[test]
    fn param_rgba_rejects_wrong_length() {
        let params = json!({"clear_color": [0.25, 0.5, 1]});
        assert_eq!(
            param_rgba(&params, "clear_color", [0.0, 0.0, 0.0, 1.0]),
            [0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn param_rgba_rejects_non_numeric_element() {
        let params = json!({"clear_color": [0.25, "half", 1, 1]});
        assert_eq!(
            param_rgba(&params, "clear_color", [0.0, 0.0, 0.0, 1.0]),
            [0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn param_rgba_returns_default_when_missing() {
        let params = json!({});
        assert_eq!(
            param_rgba(&params, "clear_color", [1.0, 0.0, 0.0, 1.0]),
            [1.0, 0.0, 0.0, 1.0]
        );
    }
}
