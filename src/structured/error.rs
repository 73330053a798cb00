//! Error types for structured output validation.

use std::fmt;

/// Validation error with location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error message describing what went wrong
    pub message: String,
    /// JSON path to the error location (e.g., "product_name", "specs.weight")
    pub path: Option<String>,
}

impl ValidationError {
    pub fn with_path(message: impl Into<String>, path: String) -> Self {
        Self {
            message: message.into(),
            path: Some(path),
        }
    }

    pub fn without_path(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of a validation operation.
///
/// A tagged success/failure value rather than an exception: callers branch on
/// [`is_valid`](ValidationResult::is_valid) or convert with
/// [`into_result`](ValidationResult::into_result).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// List of validation errors (empty if valid)
    pub errors: Vec<ValidationError>,
    /// Validated data (None if invalid)
    pub data: Option<serde_json::Value>,
}

impl ValidationResult {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: false,
            errors,
            data: None,
        }
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self::failure(vec![error])
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Get errors as formatted strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Convert to Result, surfacing all errors if invalid.
    pub fn into_result(self) -> Result<serde_json::Value, Vec<ValidationError>> {
        if self.valid {
            Ok(self.data.unwrap_or(serde_json::Value::Null))
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_path() {
        let with = ValidationError::with_path("Invalid type", "product_name".to_string());
        assert_eq!(with.to_string(), "product_name: Invalid type");

        let without = ValidationError::without_path("Invalid type");
        assert_eq!(without.to_string(), "Invalid type");
    }

    #[test]
    fn test_success_result() {
        let data = serde_json::json!({"product_name": "Widget"});
        let result = ValidationResult::success(data.clone());
        assert!(result.is_valid());
        assert_eq!(result.into_result(), Ok(data));
    }

    #[test]
    fn test_failure_result() {
        let errors = vec![
            ValidationError::with_path("Missing required property", "product_name".to_string()),
            ValidationError::with_path("Expected type 'integer'", "tentative_price_inr".to_string()),
        ];
        let result = ValidationResult::failure(errors.clone());
        assert!(!result.is_valid());
        assert_eq!(result.error_messages().len(), 2);
        assert_eq!(result.into_result(), Err(errors));
    }
}
