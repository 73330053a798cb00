//! Structured output: schema construction, validation, and typed decode.
//!
//! - [`OutputValidator`]: validate parsed JSON against a schema
//! - [`ValidationResult`] / [`ValidationError`]: tagged validation outcome
//! - [`SchemaGenerator`] / [`product_info_schema`]: schema construction
//! - [`decode_validated`]: parse + validate + decode in one step
//!
//! # Examples
//!
//! ```
//! use structured_query::structured::{product_info_schema, OutputValidator};
//! use serde_json::json;
//!
//! let validator = OutputValidator::lenient(product_info_schema());
//! let data = json!({
//!     "product_name": "Widget X",
//!     "product_details": "A small widget",
//!     "tentative_price_inr": 499
//! });
//! assert!(validator.validate(&data).is_valid());
//! ```

pub mod decode;
pub mod error;
pub mod schema;
pub mod validator;

pub use decode::decode_validated;
pub use error::{ValidationError, ValidationResult};
pub use schema::{json_schema_from_type, product_info_schema, SchemaGenerator};
pub use validator::OutputValidator;
