//! Merchant account tools.
//!
//! List and retrieve the merchant accounts the API credential can access.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::client::{AdyenClient, ListMerchantAccountsQuery, ManagementApi};

use super::super::common::{error_result, payload_result};

/// Parameters for listing merchant accounts.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMerchantAccountsParams {
    #[schemars(description = "The number of the page to fetch")]
    pub page_number: Option<u32>,

    #[schemars(description = "The number of items to have on a page, maximum 100")]
    pub page_size: Option<u32>,
}

/// List Merchant Accounts tool implementation.
pub struct ListMerchantAccountsTool;

impl ListMerchantAccountsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_merchant_accounts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Lists the merchant accounts the API credential has access to. Corresponds to \
         the Management API GET /merchants endpoint. No parameters are required. \
         Example: list_merchant_accounts({}) returns the Adyen response object listing \
         merchant accounts, or an error message.";

    /// Execute the tool logic: one Management API call.
    pub async fn execute(
        params: &ListMerchantAccountsParams,
        client: &AdyenClient,
    ) -> CallToolResult {
        info!("Listing merchant accounts");

        let query = ListMerchantAccountsQuery {
            page_number: params.page_number,
            page_size: params.page_size,
        };

        match ManagementApi::new(client).list_merchant_accounts(&query).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to list merchant accounts. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListMerchantAccountsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<AdyenClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListMerchantAccountsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for retrieving a merchant account.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMerchantAccountParams {
    /// Unique identifier of the merchant account.
    #[schemars(description = "Unique identifier of the merchant account (e.g. 'YOUR_MERCHANT_ACCOUNT')")]
    pub merchant_id: String,
}

/// Get Merchant Account tool implementation.
pub struct GetMerchantAccountTool;

impl GetMerchantAccountTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_merchant_account";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the details of a merchant account. Corresponds to the Management API \
         GET /merchants/{merchantId} endpoint. \
         Example: get_merchant_account({merchantId: \"AdyenDemo_ECOM\"}) returns the \
         merchant account object or an error message.";

    /// Execute the tool logic: one Management API call.
    pub async fn execute(params: &GetMerchantAccountParams, client: &AdyenClient) -> CallToolResult {
        info!("Getting merchant account {}", params.merchant_id);

        match ManagementApi::new(client)
            .get_merchant_account(&params.merchant_id)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get merchant account. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMerchantAccountParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<AdyenClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: GetMerchantAccountParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_all_optional() {
        let params: ListMerchantAccountsParams = serde_json::from_str("{}").unwrap();
        assert!(params.page_number.is_none());
        assert!(params.page_size.is_none());
    }

    #[test]
    fn test_get_params_require_merchant_id() {
        let result = serde_json::from_str::<GetMerchantAccountParams>("{}");
        assert!(result.is_err());
    }
}
