//! Product query and prompt template.

use crate::{Error, ErrorContext, Result};

/// Fixed system instruction for every completion request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful product assistant. Always respond with valid JSON.";

/// A free-form product request from the user.
///
/// Non-empty by construction; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    text: String,
}

impl ProductQuery {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "product query must not be empty",
                ErrorContext::new().with_field_path("query.text"),
            ));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Build the deterministic prompt for a query.
///
/// Embeds the query text verbatim together with a JSON example naming the
/// three expected fields, to bias the model toward machine-parseable output.
/// The query text is not escaped; text resembling the schema block could
/// steer the model into malformed output.
pub fn build_prompt(query: &ProductQuery) -> String {
    format!(
        r#"Provide product information for: {}

Respond with valid JSON in this exact format:
{{
    "product_name": "name here",
    "product_details": "details here",
    "tentative_price_inr": 99999
}}"#,
        query.text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        assert!(ProductQuery::new("").is_err());
        assert!(ProductQuery::new("   ").is_err());
    }

    #[test]
    fn test_prompt_contains_query_text() {
        let query = ProductQuery::new("Tell me about the motorola edge 60 ultra.").unwrap();
        let prompt = build_prompt(&query);
        assert!(prompt.contains("Tell me about the motorola edge 60 ultra."));
    }

    #[test]
    fn test_prompt_names_all_schema_fields() {
        let query = ProductQuery::new("any query").unwrap();
        let prompt = build_prompt(&query);
        assert!(prompt.contains("product_name"));
        assert!(prompt.contains("product_details"));
        assert!(prompt.contains("tentative_price_inr"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let query = ProductQuery::new("wireless earbuds").unwrap();
        assert_eq!(build_prompt(&query), build_prompt(&query));
    }
}
