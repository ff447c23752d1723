//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, in stable declared order
//! - Dispatch of tool calls by name over the shared Adyen client
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::client::AdyenClient;

use super::definitions::{
    CancelPaymentTool, CreateOnboardingLinkTool, CreatePaymentLinkTool, CreatePaymentSessionTool,
    GetAccountHolderTool, GetLegalEntityTool, GetMerchantAccountTool, GetPaymentLinkTool,
    GetPaymentMethodsTool, GetPaymentSessionTool, GetTerminalsTool, ListMerchantAccountsTool,
    RefundPaymentTool, ReassignTerminalTool, UpdatePaymentLinkTool,
};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching tool calls by name
///
/// The registry is assembled once at startup and immutable thereafter.
/// Duplicate tool names are a startup defect; a test below guards name
/// uniqueness across every declared tool.
pub struct ToolRegistry {
    client: Arc<AdyenClient>,
}

impl ToolRegistry {
    /// Create a new tool registry over the shared Adyen client.
    pub fn new(client: Arc<AdyenClient>) -> Self {
        Self { client }
    }

    /// Get all tool names, in declared order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CreatePaymentLinkTool::NAME,
            GetPaymentLinkTool::NAME,
            UpdatePaymentLinkTool::NAME,
            CreatePaymentSessionTool::NAME,
            GetPaymentSessionTool::NAME,
            GetPaymentMethodsTool::NAME,
            RefundPaymentTool::NAME,
            CancelPaymentTool::NAME,
            ListMerchantAccountsTool::NAME,
            GetMerchantAccountTool::NAME,
            GetTerminalsTool::NAME,
            ReassignTerminalTool::NAME,
            GetLegalEntityTool::NAME,
            CreateOnboardingLinkTool::NAME,
            GetAccountHolderTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the declared tool order;
    /// the router test asserts it stays in sync with the routes.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CreatePaymentLinkTool::to_tool(),
            GetPaymentLinkTool::to_tool(),
            UpdatePaymentLinkTool::to_tool(),
            CreatePaymentSessionTool::to_tool(),
            GetPaymentSessionTool::to_tool(),
            GetPaymentMethodsTool::to_tool(),
            RefundPaymentTool::to_tool(),
            CancelPaymentTool::to_tool(),
            ListMerchantAccountsTool::to_tool(),
            GetMerchantAccountTool::to_tool(),
            GetTerminalsTool::to_tool(),
            ReassignTerminalTool::to_tool(),
            GetLegalEntityTool::to_tool(),
            CreateOnboardingLinkTool::to_tool(),
            GetAccountHolderTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Arguments are validated against the tool's schema by
    /// deserialization; the tool body never runs on invalid input.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        fn parse<P: serde::de::DeserializeOwned>(
            arguments: serde_json::Value,
        ) -> Result<P, ToolError> {
            serde_json::from_value(arguments)
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))
        }

        let client = &self.client;
        match name {
            CreatePaymentLinkTool::NAME => {
                Ok(CreatePaymentLinkTool::execute(&parse(arguments)?, client).await)
            }
            GetPaymentLinkTool::NAME => {
                Ok(GetPaymentLinkTool::execute(&parse(arguments)?, client).await)
            }
            UpdatePaymentLinkTool::NAME => {
                Ok(UpdatePaymentLinkTool::execute(&parse(arguments)?, client).await)
            }
            CreatePaymentSessionTool::NAME => {
                Ok(CreatePaymentSessionTool::execute(&parse(arguments)?, client).await)
            }
            GetPaymentSessionTool::NAME => {
                Ok(GetPaymentSessionTool::execute(&parse(arguments)?, client).await)
            }
            GetPaymentMethodsTool::NAME => {
                Ok(GetPaymentMethodsTool::execute(&parse(arguments)?, client).await)
            }
            RefundPaymentTool::NAME => {
                Ok(RefundPaymentTool::execute(&parse(arguments)?, client).await)
            }
            CancelPaymentTool::NAME => {
                Ok(CancelPaymentTool::execute(&parse(arguments)?, client).await)
            }
            ListMerchantAccountsTool::NAME => {
                Ok(ListMerchantAccountsTool::execute(&parse(arguments)?, client).await)
            }
            GetMerchantAccountTool::NAME => {
                Ok(GetMerchantAccountTool::execute(&parse(arguments)?, client).await)
            }
            GetTerminalsTool::NAME => {
                Ok(GetTerminalsTool::execute(&parse(arguments)?, client).await)
            }
            ReassignTerminalTool::NAME => {
                Ok(ReassignTerminalTool::execute(&parse(arguments)?, client).await)
            }
            GetLegalEntityTool::NAME => {
                Ok(GetLegalEntityTool::execute(&parse(arguments)?, client).await)
            }
            CreateOnboardingLinkTool::NAME => {
                Ok(CreateOnboardingLinkTool::execute(&parse(arguments)?, client).await)
            }
            GetAccountHolderTool::NAME => {
                Ok(GetAccountHolderTool::execute(&parse(arguments)?, client).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use std::collections::HashSet;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(test_client("http://localhost:1")))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 15);
        assert!(names.contains(&"create_payment_link"));
        assert!(names.contains(&"get_payment_link"));
        assert!(names.contains(&"update_payment_link"));
        assert!(names.contains(&"create_payment_session"));
        assert!(names.contains(&"get_payment_session"));
        assert!(names.contains(&"get_payment_methods"));
        assert!(names.contains(&"refund_payment"));
        assert!(names.contains(&"cancel_payment"));
        assert!(names.contains(&"list_merchant_accounts"));
        assert!(names.contains(&"get_merchant_account"));
        assert!(names.contains(&"get_terminals"));
        assert!(names.contains(&"reassign_terminal"));
        assert!(names.contains(&"get_legal_entity"));
        assert!(names.contains(&"create_onboarding_link"));
        assert!(names.contains(&"get_account_holder"));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = test_registry();
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_registry_metadata_matches_declared_order() {
        let registry = test_registry();
        let metadata_names: Vec<_> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(registry.tool_names(), metadata_names);
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_registry_rejects_invalid_arguments_before_invoke() {
        let registry = test_registry();
        // Missing the required id; the tool body never runs, so no request
        // is attempted against the unroutable client.
        let result = registry
            .call_tool("get_legal_entity", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
