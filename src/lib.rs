//! # bavard - Topic Chat CLI
//!
//! `bavard` asks for your name and a subject, then answers your questions
//! about that subject using an OpenAI-compatible chat completion endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//!
//! # Fill in the welcome form, then chat
//! bavard
//!
//! # Skip the form
//! bavard --name Alice --subject "les volcans"
//!
//! # Use another configured provider
//! bavard --provider ollama --model llama3.2
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/bavard/config.toml`:
//!
//! ```toml
//! [bavard]
//! provider = "ollama"
//! model = "llama3.2"
//! name = "Alice"
//! subject = "les volcans"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["llama3.2"]
//! ```
//!
//! Without a config file, the built-in `openai` provider is used with the
//! key from `OPENAI_API_KEY`.

/// Interactive chat mode and the turn controller behind it.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat completion client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management and provider settings.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Session bootstrap and session context.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
