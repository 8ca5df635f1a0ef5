// gatordocs - design-system documentation Q&A relay for a local Ollama server

pub mod cache;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod metrics;
pub mod ollama;
pub mod prompt;
pub mod relay;
pub mod server;
pub mod utils;
