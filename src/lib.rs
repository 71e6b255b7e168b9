//! # quo - Audio Quote Chat CLI
//!
//! `quo` is a command-line assistant that walks through a short set of
//! intake questions and turns the answers into an audio equipment quote
//! from a quoting service.
//!
//! ## Features
//!
//! - **Scripted intake**: a fixed four-question flow, one answer per turn
//! - **Customer modes**: Residential, Commercial, Tender and Insurance pricing
//! - **Live quotes**: line items with per-line totals and a subtotal
//! - **Slash commands**: switch modes or review the quote mid-conversation
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a quote conversation
//! quo
//!
//! # Start in a different customer mode
//! quo --mode commercial
//!
//! # Point at a different quoting service
//! quo --endpoint https://quotes.example.com
//!
//! # List customer modes
//! quo modes
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/quo/config.toml`:
//!
//! ```toml
//! [quo]
//! mode = "Residential"
//! endpoint = "https://audico-api-gpt.onrender.com"
//! ```

/// Interactive chat session and slash commands.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// The conversation state machine.
pub mod conversation;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Quote domain: modes, line items and the service client.
pub mod quote;

/// Terminal UI components (spinner, colors).
pub mod ui;
