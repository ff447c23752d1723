//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, one file per Adyen
//! resource. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (one vendor API call)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Error;
use crate::client::{AdyenClient, Endpoints};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the Adyen tool definitions over one shared client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared Adyen API client, borrowed by every tool invocation.
    client: Arc<AdyenClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails with a configuration error when no API key is set, or when the
    /// live environment is selected without a live endpoint URL prefix.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);

        let api_key = config
            .adyen
            .api_key
            .clone()
            .ok_or_else(|| Error::config("ADYEN_API_KEY is not set"))?;
        let endpoints = Endpoints::for_environment(
            config.adyen.environment,
            config.adyen.live_endpoint_prefix.as_deref(),
        )?;
        let client = Arc::new(AdyenClient::new(
            api_key,
            endpoints,
            config.adyen.merchant_account.clone(),
        ));

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared Adyen client.
    pub fn client(&self) -> &Arc<AdyenClient> {
        &self.client
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes Adyen payment-platform operations as tools: \
                 payment links, payment sessions, payment methods, refunds and \
                 cancellations, merchant accounts, payment terminals, legal \
                 entities, onboarding links, and account holders. Every tool \
                 performs exactly one Adyen API call and returns either the raw \
                 API response or a descriptive error message."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Environment;

    #[test]
    fn test_server_requires_api_key() {
        let config = Config::default();
        let result = McpServer::new(config);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_server_live_requires_prefix() {
        let mut config = Config::default();
        config.adyen.api_key = Some("key".to_string());
        config.adyen.environment = Environment::Live;
        let result = McpServer::new(config);
        assert!(matches!(result, Err(Error::Client(_))));
    }

    #[test]
    fn test_server_builds_with_test_credentials() {
        let mut config = Config::default();
        config.adyen.api_key = Some("key".to_string());
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.name(), "adyen-mcp-server");
        assert!(server.client().merchant_account().is_none());
    }
}
