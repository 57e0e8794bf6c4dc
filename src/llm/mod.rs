pub mod client;
pub mod response;

pub use client::{ChatBackend, CompletionRequest, GroqClient, LlmError};
pub use response::GenerationOutput;
