//! # structured-query
//!
//! Turn a free-text product query into a validated, strongly-typed record by
//! round-tripping through a hosted chat-completion endpoint.
//!
//! The pipeline is deliberately linear: build a prompt, make one outbound
//! HTTPS call, parse the reply as JSON, validate it against a fixed
//! three-field schema, and decode it into [`ProductInfo`]. There is no retry,
//! no streaming, and no conversation state; the first failure of either the
//! transport or the parse boundary ends the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use structured_query::{ProductQuery, StructuredQueryClient};
//!
//! #[tokio::main]
//! async fn main() -> structured_query::Result<()> {
//!     let client = StructuredQueryClient::from_env()?;
//!     let query = ProductQuery::new("Tell me about the motorola edge 60 ultra.")?;
//!
//!     let info = client.fetch_product_info(&query).await?;
//!     println!("{} — {} — INR {}", info.product_name, info.product_details, info.tentative_price_inr);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The query client and its builder |
//! | [`config`] | Explicit client configuration and env loading |
//! | [`prompt`] | Query type and prompt template |
//! | [`structured`] | Schema construction, validation, and typed decode |
//! | [`transport`] | HTTP transport to the completion endpoint |
//! | [`types`] | Messages, wire envelopes, and the product record |

pub mod client;
pub mod config;
pub mod prompt;
pub mod structured;
pub mod transport;
pub mod types;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

// Re-export main types for convenience
pub use client::{StructuredQueryClient, StructuredQueryClientBuilder};
pub use config::ClientConfig;
pub use prompt::ProductQuery;
pub use types::ProductInfo;
