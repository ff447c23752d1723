//! Adyen MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! Adyen payment-platform operations as schema-validated tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **client**: Thin async client for the Adyen API surfaces the tools call
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools wrapping one Adyen API call each
//!
//! # Example
//!
//! ```rust,no_run
//! use adyen_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use client::AdyenClient;
pub use core::{Config, Error, McpServer, Result};
