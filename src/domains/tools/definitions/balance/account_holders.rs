//! Account holder tool.
//!
//! Retrieves account holders from the Balance Platform Configuration API.

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

use crate::client::{AdyenClient, BalancePlatformApi};

use super::super::common::{error_result, payload_result};

/// Parameters for retrieving an account holder.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAccountHolderParams {
    /// Unique identifier of the account holder.
    #[schemars(description = "Unique identifier of the account holder (e.g. 'AH32272223222B5CM4MWJ892H')")]
    pub id: String,
}

/// Get Account Holder tool implementation.
pub struct GetAccountHolderTool;

impl GetAccountHolderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_account_holder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the details of an account holder on the balance platform, including its \
         status and capabilities. Corresponds to the Balance Platform Configuration API \
         GET /accountHolders/{id} endpoint. \
         Example: get_account_holder({id: \"AH32272223222B5CM4MWJ892H\"}) returns the \
         Adyen account holder object or an error message.";

    /// Execute the tool logic: one Balance Platform API call.
    pub async fn execute(params: &GetAccountHolderParams, client: &AdyenClient) -> CallToolResult {
        info!("Getting account holder {}", params.id);

        match BalancePlatformApi::new(client)
            .get_account_holder(&params.id)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get account holder. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAccountHolderParams>(),
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
                let params: GetAccountHolderParams =
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
    fn test_params_require_id() {
        let result = serde_json::from_str::<GetAccountHolderParams>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_params_reject_wrong_type() {
        let result = serde_json::from_str::<GetAccountHolderParams>(r#"{"id": 42}"#);
        assert!(result.is_err());
    }
}
