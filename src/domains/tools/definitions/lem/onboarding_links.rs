//! Hosted onboarding link tool.
//!
//! Creates links to the Adyen-hosted onboarding page for a legal entity.

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

use crate::client::{AdyenClient, LegalEntityManagementApi, OnboardingLinkRequest};

use super::super::common::{error_result, payload_result};

/// Parameters for creating a hosted onboarding link.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOnboardingLinkParams {
    /// Legal entity the onboarding link is created for.
    #[schemars(description = "Unique identifier of the legal entity to onboard")]
    pub legal_entity_id: String,

    #[schemars(description = "Identifier of the hosted onboarding theme to apply")]
    pub theme_id: Option<String>,

    #[schemars(description = "URL the user is redirected to after completing onboarding")]
    pub redirect_url: Option<String>,

    #[schemars(description = "Language of the onboarding page (e.g. 'nl-NL')")]
    pub locale: Option<String>,
}

/// Create Onboarding Link tool implementation.
pub struct CreateOnboardingLinkTool;

impl CreateOnboardingLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_onboarding_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Creates a link to the Adyen-hosted onboarding page for a legal entity. \
         Corresponds to the Legal Entity Management API \
         POST /legalEntities/{id}/onboardingLinks endpoint. The link is single-use and \
         expires after a few minutes. \
         Example: create_onboarding_link({legalEntityId: \"LE322KL239863H5GLPPJ255S\"}) \
         returns an object containing the url, or an error message.";

    /// Execute the tool logic: one Legal Entity Management API call.
    pub async fn execute(
        params: &CreateOnboardingLinkParams,
        client: &AdyenClient,
    ) -> CallToolResult {
        info!("Creating onboarding link for {}", params.legal_entity_id);

        let request = OnboardingLinkRequest {
            theme_id: params.theme_id.clone(),
            redirect_url: params.redirect_url.clone(),
            locale: params.locale.clone(),
        };

        match LegalEntityManagementApi::new(client)
            .create_onboarding_link(&params.legal_entity_id, &request)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to create onboarding link. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateOnboardingLinkParams>(),
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
                let params: CreateOnboardingLinkParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
