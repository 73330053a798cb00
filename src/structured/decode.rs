//! Typed decode of validated model output.
//!
//! The parse boundary of the crate: raw reply text goes in, a typed record
//! comes out, and every way that can fail collapses into the single
//! [`Error::StructuredParse`](crate::Error::StructuredParse) variant carrying
//! the original cause.

use crate::structured::validator::OutputValidator;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;

/// Parse `raw` as JSON, validate it against `validator`'s schema, and decode
/// the validated value into `T`.
///
/// Idempotent: decoding the same well-formed text twice yields equal records.
pub fn decode_validated<T: DeserializeOwned>(validator: &OutputValidator, raw: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        Error::structured_parse_with_context(
            "model reply is not valid JSON",
            ErrorContext::new()
                .with_details(e.to_string())
                .with_source("json_parser"),
        )
    })?;

    let validated = validator.validate(&value).into_result().map_err(|errors| {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Error::structured_parse_with_context(
            "model reply does not match the expected schema",
            ErrorContext::new()
                .with_details(joined)
                .with_source("output_validator"),
        )
    })?;

    // Validation has pinned the shape; a decode failure here means the
    // schema and the target type disagree.
    serde_json::from_value(validated).map_err(|e| {
        Error::structured_parse_with_context(
            "validated reply could not be decoded into the target type",
            ErrorContext::new()
                .with_details(e.to_string())
                .with_source("typed_decode"),
        )
    })
}
