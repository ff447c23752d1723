//! Core infrastructure for the MCP server.
//!
//! This module contains configuration, error handling, the main server
//! handler, and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::StdioTransport;
