//! The structured-query client.

use crate::config::ClientConfig;
use crate::prompt::{self, ProductQuery, SYSTEM_INSTRUCTION};
use crate::structured::{decode_validated, product_info_schema, OutputValidator};
use crate::transport::HttpTransport;
use crate::types::{ChatCompletionRequest, Message, ProductInfo};
use crate::{Error, ErrorContext, Result};

/// Client that turns a free-text product query into a validated
/// [`ProductInfo`] record by round-tripping through a chat-completion
/// endpoint.
///
/// Linear pipeline, one execution per invocation:
/// query → prompt → completion call → raw text → parse + validate → record.
pub struct StructuredQueryClient {
    config: ClientConfig,
    transport: HttpTransport,
    validator: OutputValidator,
}

impl StructuredQueryClient {
    /// Construct a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let validator = OutputValidator::lenient(product_info_schema());
        Ok(Self {
            config,
            transport,
            validator,
        })
    }

    /// Construct a client with the API key taken from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn builder() -> StructuredQueryClientBuilder {
        StructuredQueryClientBuilder::new()
    }

    /// Build the prompt string for a query.
    pub fn build_prompt(&self, query: &ProductQuery) -> String {
        prompt::build_prompt(query)
    }

    /// Send one completion request and return the raw reply text, trimmed.
    ///
    /// One outbound call, no retry, no streaming. Transport and API errors
    /// propagate unwrapped; an envelope without usable content is reported as
    /// a structured-parse error since the call itself succeeded.
    pub async fn request_completion(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)],
            max_tokens: self.config.max_tokens,
        };

        let envelope = self.transport.execute_chat(&request).await?;
        tracing::debug!(
            choices = envelope.choices.len(),
            "completion reply received"
        );

        let content = envelope.first_content().ok_or_else(|| {
            Error::structured_parse_with_context(
                "completion reply contained no generated content",
                ErrorContext::new()
                    .with_field_path("choices[0].message.content")
                    .with_source("completion_envelope"),
            )
        })?;

        Ok(content.trim().to_string())
    }

    /// Parse and validate raw reply text into a typed record.
    ///
    /// Any JSON syntax error or schema violation surfaces as the single
    /// [`Error::StructuredParse`] variant; there is no partial record and no
    /// coercion of mismatched types.
    pub fn parse_and_validate(&self, raw: &str) -> Result<ProductInfo> {
        decode_validated(&self.validator, raw)
    }

    /// Fetch product information for a query.
    ///
    /// Sequential composition of [`build_prompt`](Self::build_prompt),
    /// [`request_completion`](Self::request_completion), and
    /// [`parse_and_validate`](Self::parse_and_validate).
    pub async fn fetch_product_info(&self, query: &ProductQuery) -> Result<ProductInfo> {
        let prompt = self.build_prompt(query);
        let raw = self.request_completion(&prompt).await?;
        self.parse_and_validate(&raw)
    }
}

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable. The `base_url` setter also
/// serves as the mock-server override in tests.
pub struct StructuredQueryClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    timeout: Option<std::time::Duration>,
}

impl StructuredQueryClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: None,
            max_tokens: None,
            timeout: None,
        }
    }

    /// Set the API credential. Falls back to the environment when unset.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the endpoint base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<StructuredQueryClient> {
        let mut config = match self.api_key {
            Some(key) => ClientConfig::new(key),
            None => ClientConfig::from_env()?,
        };
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(max_tokens) = self.max_tokens {
            config = config.with_max_tokens(max_tokens);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        StructuredQueryClient::new(config)
    }
}

impl Default for StructuredQueryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
