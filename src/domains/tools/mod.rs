//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool wraps exactly one Adyen API call: it validates its arguments
//! against a declared schema, performs the call over the shared client, and
//! returns either the raw API response or a prefixed error message.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one directory per
//!   Adyen API surface, one file per resource)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp server handler
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add the vendor call to the matching sub-client in `src/client/`
//! 2. Create the tool in `definitions/` (params, execute(), to_tool(),
//!    create_route())
//! 3. Export it in `definitions/mod.rs`
//! 4. Add a route in `router.rs` using `with_route()`
//! 5. Register it in `registry.rs`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
