//! Core type definitions: chat messages, wire envelopes, and the product record.

pub mod message;
pub mod product;
pub mod response;

pub use message::{Message, MessageRole};
pub use product::ProductInfo;
pub use response::{ChatCompletionRequest, ChatCompletionResponse, Choice, Usage};
