//! Schema generation utilities.

use serde_json::json;

/// Generator for JSON object schemas with customization options.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    title: Option<String>,
    description: Option<String>,
    properties: Vec<(String, serde_json::Value)>,
    required: Vec<String>,
    additional_properties: bool,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Mark a property as required (chainable per field).
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn allow_additional_properties(mut self, additional: bool) -> Self {
        self.additional_properties = additional;
        self
    }

    pub fn build(self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = serde_json::Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }

        if !self.additional_properties {
            map.insert("additionalProperties".into(), json!(false));
        }

        if let Some(title) = self.title {
            map.insert("title".into(), title.into());
        }
        if let Some(desc) = self.description {
            map.insert("description".into(), desc.into());
        }

        map.into()
    }
}

/// The fixed three-field schema a product reply must match.
pub fn product_info_schema() -> serde_json::Value {
    SchemaGenerator::new()
        .title("ProductInfo")
        .add_property("product_name", json!({"type": "string"}))
        .add_property("product_details", json!({"type": "string"}))
        .add_property("tentative_price_inr", json!({"type": "integer"}))
        .require("product_name")
        .require("product_details")
        .require("tentative_price_inr")
        .allow_additional_properties(true)
        .build()
}

/// Derive a JSON schema from a Rust type via `schemars`.
pub fn json_schema_from_type<T: schemars::JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).unwrap_or_else(|_| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generator_basic() {
        let schema = SchemaGenerator::new()
            .add_property("name", json!({"type": "string"}))
            .add_property("age", json!({"type": "integer"}))
            .build();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["age"]["type"], "integer");
    }

    #[test]
    fn test_schema_generator_required() {
        let schema = SchemaGenerator::new()
            .add_property("name", json!({"type": "string"}))
            .require("name")
            .build();
        assert_eq!(schema["required"][0], "name");
    }

    #[test]
    fn test_schema_generator_additional_properties_default_false() {
        let schema = SchemaGenerator::new().build();
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_product_info_schema_shape() {
        let schema = product_info_schema();
        assert_eq!(schema["type"], "object");
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert_eq!(schema["properties"]["tentative_price_inr"]["type"], "integer");
        // Extra keys in a model reply are tolerated.
        assert!(schema.get("additionalProperties").is_none());
    }
}
