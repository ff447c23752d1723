//! Business domains for the MCP server.
//!
//! Each domain is a bounded context with its own definitions, registry,
//! and error types.

pub mod tools;
