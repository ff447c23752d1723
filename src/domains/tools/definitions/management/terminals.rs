//! Payment terminal tools.
//!
//! List payment terminals and reassign them between company accounts,
//! merchant accounts, and stores.

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

use crate::client::{AdyenClient, ListTerminalsQuery, ManagementApi, ReassignTerminalRequest};

use super::super::common::{confirmation_result, error_result, payload_result};

/// Parameters for listing payment terminals.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTerminalsParams {
    #[schemars(
        description = "Returns terminals with an ID that contains the specified string; if present, other query parameters are ignored"
    )]
    pub search_query: Option<String>,

    #[schemars(
        description = "Returns terminals associated with the one-time passwords specified in the request; if present, other query parameters are ignored"
    )]
    pub otp_query: Option<String>,

    #[schemars(description = "Returns terminals located in the countries specified by their two-letter country code")]
    pub countries: Option<String>,

    #[schemars(description = "Returns terminals that belong to the merchant accounts specified by their unique merchant account ID")]
    pub merchant_ids: Option<String>,

    #[schemars(description = "Returns terminals that are assigned to the stores specified by their unique store ID")]
    pub store_ids: Option<String>,

    #[schemars(description = "Returns terminals of the models specified in the format 'brand.model'")]
    pub brand_models: Option<String>,

    #[schemars(description = "The number of the page to fetch")]
    pub page_number: Option<u32>,

    #[schemars(description = "The number of items to have on a page, maximum 100; the default is 20")]
    pub page_size: Option<u32>,
}

/// Get Terminals tool implementation.
pub struct GetTerminalsTool;

impl GetTerminalsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_terminals";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets a list of payment terminals. Corresponds to the Management API \
         GET /terminals endpoint. No parameters are required; if the user does not ask for \
         the results to be filtered, do not include any parameters in the request. The API \
         credential must have the 'Management API - Terminal actions read' role. \
         Example: get_terminals({searchQuery: \"P400\"}) returns the Adyen response object \
         listing terminals with 'P400' in their ID, or an error message.";

    /// Execute the tool logic: one Management API call.
    pub async fn execute(params: &GetTerminalsParams, client: &AdyenClient) -> CallToolResult {
        info!("Listing terminals");

        let query = ListTerminalsQuery {
            search_query: params.search_query.clone(),
            otp_query: params.otp_query.clone(),
            countries: params.countries.clone(),
            merchant_ids: params.merchant_ids.clone(),
            store_ids: params.store_ids.clone(),
            brand_models: params.brand_models.clone(),
            page_number: params.page_number,
            page_size: params.page_size,
        };

        match ManagementApi::new(client).list_terminals(&query).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get terminals. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTerminalsParams>(),
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
                let params: GetTerminalsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for reassigning a payment terminal.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTerminalParams {
    /// Unique identifier of the terminal to reassign.
    #[schemars(description = "Unique identifier of the payment terminal (e.g. 'S1F2-000150183300034')")]
    pub terminal_id: String,

    #[schemars(description = "Unique identifier of the company account to reassign the terminal to")]
    pub company_id: Option<String>,

    #[schemars(description = "Unique identifier of the merchant account to reassign the terminal to")]
    pub merchant_id: Option<String>,

    #[schemars(description = "Unique identifier of the store to reassign the terminal to")]
    pub store_id: Option<String>,

    #[schemars(
        description = "Set to true to reassign the terminal to the inventory of the specified merchant account; required when reassigning to a merchant account"
    )]
    pub inventory: Option<bool>,
}

/// Reassign Terminal tool implementation.
pub struct ReassignTerminalTool;

impl ReassignTerminalTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "reassign_terminal";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Reassigns a payment terminal to a different company account, merchant account, \
         or store. Corresponds to the Management API POST /terminals/{terminalId}/reassign \
         endpoint. When reassigning to a merchant account, the inventory field must be \
         specified. The API credential must have the 'Management API - Assign Terminal' role. \
         Example: reassign_terminal({terminalId: \"S1F2-000150183300034\", storeId: \
         \"YOUR_STORE_ID\"}) returns a confirmation or an error message.";

    /// Execute the tool logic: one Management API call.
    ///
    /// The reassign endpoint has no meaningful response body, so success is
    /// reported as a confirmation message carrying the terminal ID.
    pub async fn execute(params: &ReassignTerminalParams, client: &AdyenClient) -> CallToolResult {
        info!("Reassigning terminal {}", params.terminal_id);

        let request = ReassignTerminalRequest {
            company_id: params.company_id.clone(),
            merchant_id: params.merchant_id.clone(),
            store_id: params.store_id.clone(),
            inventory: params.inventory,
        };

        match ManagementApi::new(client)
            .reassign_terminal(&params.terminal_id, &request)
            .await
        {
            Ok(_) => confirmation_result(format!(
                "Terminal {} reassignment initiated successfully.",
                params.terminal_id
            )),
            Err(e) => error_result(&format!("Failed to reassign terminal. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReassignTerminalParams>(),
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
                let params: ReassignTerminalParams =
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
    use crate::client::tests::test_client;
    use rmcp::model::RawContent;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_get_terminals_params_all_optional() {
        let params: GetTerminalsParams = serde_json::from_str("{}").unwrap();
        assert!(params.search_query.is_none());
        assert!(params.otp_query.is_none());
        assert!(params.page_size.is_none());
    }

    #[test]
    fn test_get_terminals_params_reject_wrong_type() {
        let json = r#"{"pageNumber": "one"}"#;
        let result = serde_json::from_str::<GetTerminalsParams>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_reassign_params_require_terminal_id() {
        let json = r#"{"storeId": "ST123"}"#;
        let result = serde_json::from_str::<ReassignTerminalParams>(json);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_terminals_forwards_only_search_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/terminals"))
            .and(query_param("searchQuery", "P400"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "itemsTotal": 1,
                "data": [{"id": "P400Plus-275479597"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params: GetTerminalsParams =
            serde_json::from_str(r#"{"searchQuery": "P400"}"#).unwrap();

        let result = GetTerminalsTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(false));

        // The search query must be the only parameter on the wire.
        let requests = server.received_requests().await.unwrap();
        let sent: &Request = &requests[0];
        assert_eq!(sent.url.query(), Some("searchQuery=P400"));

        let payload = result.structured_content.unwrap();
        assert_eq!(payload["itemsTotal"], 1);
    }

    #[tokio::test]
    async fn test_reassign_returns_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/terminals/S1F2-000150183300034/reassign"))
            .and(body_json(serde_json::json!({"storeId": "ST123"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params: ReassignTerminalParams = serde_json::from_str(
            r#"{"terminalId": "S1F2-000150183300034", "storeId": "ST123"}"#,
        )
        .unwrap();

        let result = ReassignTerminalTool::execute(&params, &client).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            "Terminal S1F2-000150183300034 reassignment initiated successfully."
        );
    }

    #[tokio::test]
    async fn test_get_terminals_rejection_returns_prefixed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/terminals"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "status": 401,
                "errorCode": "000",
                "message": "HTTP Status Response - Unauthorized",
                "errorType": "security"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params: GetTerminalsParams = serde_json::from_str("{}").unwrap();

        let result = GetTerminalsTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Failed to get terminals. Error: "));
        assert!(text.contains("Unauthorized"));
    }
}
