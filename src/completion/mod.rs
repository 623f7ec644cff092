mod client;
mod error;
mod prompt;

pub use client::{CompletionBackend, CompletionClient, Message};
pub use error::CompletionError;
pub use prompt::{PREAMBLE_TEMPLATE, build_preamble, build_prompt};
