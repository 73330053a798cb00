//! Output validator for structured responses.
//!
//! Validates JSON data against JSON schemas, supporting:
//! - Basic type validation (string, integer, number, boolean, object, null)
//! - Field constraints (minLength, maxLength, pattern, minimum, maximum)
//! - Recursive object validation with required properties
//! - Additional properties control

use crate::structured::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

/// Validator for structured output.
///
/// Checks a parsed JSON value against a schema and reports every violation,
/// not just the first one.
pub struct OutputValidator {
    schema: Value,
    /// Disallow properties the schema does not name, unless the schema says otherwise.
    strict: bool,
}

impl OutputValidator {
    pub fn new(schema: Value, strict: bool) -> Self {
        Self { schema, strict }
    }

    /// Strict mode: unknown properties are violations.
    pub fn strict(schema: Value) -> Self {
        Self::new(schema, true)
    }

    /// Lenient mode: unknown properties are ignored.
    pub fn lenient(schema: Value) -> Self {
        Self::new(schema, false)
    }

    /// Validate a parsed value against the configured schema.
    pub fn validate(&self, data: &Value) -> ValidationResult {
        self.validate_against_schema(data, &self.schema, "")
    }

    fn validate_against_schema(&self, data: &Value, schema: &Value, path: &str) -> ValidationResult {
        let mut errors = Vec::new();

        let schema_type = schema.get("type").and_then(|t| t.as_str());
        if let Some(type_name) = schema_type {
            if let Err(e) = self.validate_type(data, type_name, path) {
                // A wrong type makes the remaining constraints meaningless.
                errors.push(e);
                return ValidationResult::failure(errors);
            }
        }

        if schema_type == Some("string") && data.is_string() {
            self.validate_string(data, schema, path, &mut errors);
        }

        if matches!(schema_type, Some("integer") | Some("number")) {
            if let Some(num) = data.as_f64() {
                self.validate_number(num, schema, path, &mut errors);
            }
        }

        if schema_type == Some("object") && data.is_object() {
            self.validate_object(data, schema, path, &mut errors);
        }

        if errors.is_empty() {
            ValidationResult::success(data.clone())
        } else {
            ValidationResult::failure(errors)
        }
    }

    fn validate_type(
        &self,
        data: &Value,
        expected_type: &str,
        path: &str,
    ) -> Result<(), ValidationError> {
        let is_valid = match expected_type {
            "string" => data.is_string(),
            "integer" => data.is_i64() || data.is_u64(),
            "number" => data.is_number(),
            "boolean" => data.is_boolean(),
            "object" => data.is_object(),
            "null" => data.is_null(),
            _ => true, // Unknown type, accept anything
        };

        if is_valid {
            return Ok(());
        }

        let actual_type = match data {
            Value::String(_) => "string",
            Value::Number(_) => {
                if data.as_i64().is_some() || data.as_u64().is_some() {
                    "integer"
                } else {
                    "number"
                }
            }
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Null => "null",
        };
        Err(ValidationError::with_path(
            format!("Expected type '{}', got '{}'", expected_type, actual_type),
            path.to_string(),
        ))
    }

    fn validate_string(
        &self,
        data: &Value,
        schema: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let s = match data.as_str() {
            Some(s) => s,
            None => return,
        };

        if let Some(min_length) = schema.get("minLength").and_then(|m| m.as_u64()) {
            if s.len() < min_length as usize {
                errors.push(ValidationError::with_path(
                    format!("String too short (minimum {} characters)", min_length),
                    path.to_string(),
                ));
            }
        }

        if let Some(max_length) = schema.get("maxLength").and_then(|m| m.as_u64()) {
            if s.len() > max_length as usize {
                errors.push(ValidationError::with_path(
                    format!("String too long (maximum {} characters)", max_length),
                    path.to_string(),
                ));
            }
        }

        if let Some(pattern) = schema.get("pattern").and_then(|p| p.as_str()) {
            if let Ok(re) = Regex::new(pattern) {
                if !re.is_match(s) {
                    errors.push(ValidationError::with_path(
                        "String does not match required pattern".to_string(),
                        path.to_string(),
                    ));
                }
            }
            // Invalid regex in the schema: skip the constraint.
        }
    }

    fn validate_number(
        &self,
        value: f64,
        schema: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        if let Some(minimum) = schema.get("minimum").and_then(|m| m.as_f64()) {
            if value < minimum {
                errors.push(ValidationError::with_path(
                    format!("Value below minimum ({})", minimum),
                    path.to_string(),
                ));
            }
        }

        if let Some(maximum) = schema.get("maximum").and_then(|m| m.as_f64()) {
            if value > maximum {
                errors.push(ValidationError::with_path(
                    format!("Value above maximum ({})", maximum),
                    path.to_string(),
                ));
            }
        }
    }

    fn validate_object(
        &self,
        data: &Value,
        schema: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let obj = match data.as_object() {
            Some(o) => o,
            None => return,
        };

        let required: Vec<&str> = schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        for prop_name in &required {
            if !obj.contains_key(*prop_name) {
                errors.push(ValidationError::with_path(
                    format!("Missing required property: {}", prop_name),
                    join_path(path, prop_name),
                ));
            }
        }

        let empty = serde_json::Map::new();
        let properties = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .unwrap_or(&empty);

        for (prop_name, prop_schema) in properties {
            if let Some(prop_value) = obj.get(prop_name) {
                let prop_path = join_path(path, prop_name);
                let result = self.validate_against_schema(prop_value, prop_schema, &prop_path);
                if !result.is_valid() {
                    errors.extend(result.errors);
                }
            }
        }

        let additional_allowed = schema
            .get("additionalProperties")
            .and_then(|a| a.as_bool())
            .unwrap_or(!self.strict);

        if !additional_allowed {
            let allowed_keys: HashSet<&str> = properties.keys().map(|k| k.as_str()).collect();
            for key in obj.keys() {
                if !allowed_keys.contains(key.as_str()) {
                    errors.push(ValidationError::with_path(
                        format!("Additional property not allowed: {}", key),
                        join_path(path, key),
                    ));
                }
            }
        }
    }
}

fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", base, key)
    }
}
