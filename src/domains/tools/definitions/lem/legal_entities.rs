//! Legal entity tool.
//!
//! Retrieves legal entities from the Legal Entity Management API.

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

use crate::client::{AdyenClient, LegalEntityManagementApi};

use super::super::common::{error_result, payload_result};

/// Parameters for retrieving a legal entity.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetLegalEntityParams {
    /// Unique identifier of the legal entity.
    #[schemars(description = "Unique identifier of the legal entity (e.g. 'LE322KL239863H5GLPPJ255S')")]
    pub id: String,
}

/// Get Legal Entity tool implementation.
pub struct GetLegalEntityTool;

impl GetLegalEntityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_legal_entity";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the details of a legal entity, including its verification status. \
         Corresponds to the Legal Entity Management API GET /legalEntities/{id} endpoint. \
         Example: get_legal_entity({id: \"LE322KL239863H5GLPPJ255S\"}) returns the Adyen \
         legal entity object or an error message.";

    /// Execute the tool logic: one Legal Entity Management API call.
    pub async fn execute(params: &GetLegalEntityParams, client: &AdyenClient) -> CallToolResult {
        info!("Getting legal entity {}", params.id);

        match LegalEntityManagementApi::new(client)
            .get_legal_entity(&params.id)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get legal entity. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetLegalEntityParams>(),
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
                let params: GetLegalEntityParams =
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_params_require_id() {
        let result = serde_json::from_str::<GetLegalEntityParams>("{}");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_legal_entity_returns_payload_unmodified() {
        let body = serde_json::json!({
            "id": "LE322KL239863H5GLPPJ255S",
            "type": "organization",
            "organization": {"legalName": "Example Company B.V."}
        });

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/legalEntities/LE322KL239863H5GLPPJ255S"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params = GetLegalEntityParams {
            id: "LE322KL239863H5GLPPJ255S".to_string(),
        };

        let result = GetLegalEntityTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(body));
    }
}
