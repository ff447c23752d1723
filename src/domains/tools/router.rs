//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route over the shared Adyen
//! client; this module only assembles them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::client::AdyenClient;

use super::definitions::{
    CancelPaymentTool, CreateOnboardingLinkTool, CreatePaymentLinkTool, CreatePaymentSessionTool,
    GetAccountHolderTool, GetLegalEntityTool, GetMerchantAccountTool, GetPaymentLinkTool,
    GetPaymentMethodsTool, GetPaymentSessionTool, GetTerminalsTool, ListMerchantAccountsTool,
    RefundPaymentTool, ReassignTerminalTool, UpdatePaymentLinkTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<AdyenClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreatePaymentLinkTool::create_route(client.clone()))
        .with_route(GetPaymentLinkTool::create_route(client.clone()))
        .with_route(UpdatePaymentLinkTool::create_route(client.clone()))
        .with_route(CreatePaymentSessionTool::create_route(client.clone()))
        .with_route(GetPaymentSessionTool::create_route(client.clone()))
        .with_route(GetPaymentMethodsTool::create_route(client.clone()))
        .with_route(RefundPaymentTool::create_route(client.clone()))
        .with_route(CancelPaymentTool::create_route(client.clone()))
        .with_route(ListMerchantAccountsTool::create_route(client.clone()))
        .with_route(GetMerchantAccountTool::create_route(client.clone()))
        .with_route(GetTerminalsTool::create_route(client.clone()))
        .with_route(ReassignTerminalTool::create_route(client.clone()))
        .with_route(GetLegalEntityTool::create_route(client.clone()))
        .with_route(CreateOnboardingLinkTool::create_route(client.clone()))
        .with_route(GetAccountHolderTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::client::tests::test_client;

    struct TestServer {}

    fn shared_client() -> Arc<AdyenClient> {
        Arc::new(test_client("http://localhost:1"))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(shared_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 15);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"create_payment_link"));
        assert!(names.contains(&"refund_payment"));
        assert!(names.contains(&"get_terminals"));
        assert!(names.contains(&"reassign_terminal"));
        assert!(names.contains(&"get_legal_entity"));
        assert!(names.contains(&"get_account_holder"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry = ToolRegistry::new(shared_client());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(shared_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
