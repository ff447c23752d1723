//! Transport layer for the MCP server.
//!
//! STDIO is the standard MCP serving mode and the only transport this
//! server owns; it handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
