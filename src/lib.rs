pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod parser;
pub mod prompts;
pub mod services;
pub mod state;
