use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.api_key", "product_name")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, original cause)
    pub details: Option<String>,
    /// Source of the error (e.g., "output_validator", "json_parser")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the structured-query client.
///
/// Two failure families matter to callers: transport/API errors, which
/// propagate unwrapped, and structured-parse errors, which wrap everything
/// that can go wrong between raw model text and a typed record.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Structured parse error: {message}{}", format_context(.context))]
    StructuredParse {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new structured-parse error with structured context
    pub fn structured_parse_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::StructuredParse {
            message: msg.into(),
            context,
        }
    }

    /// Create a structured-parse error that records its original cause
    pub fn structured_parse_caused_by(
        msg: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Error::StructuredParse {
            message: msg.into(),
            context: ErrorContext::new().with_details(cause.to_string()),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::StructuredParse { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Whether this error came from the parse/validate boundary.
    pub fn is_structured_parse(&self) -> bool {
        matches!(self, Error::StructuredParse { .. })
    }
}
