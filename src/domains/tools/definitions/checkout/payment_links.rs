//! Payment link tools.
//!
//! Create, retrieve, and expire Adyen Pay by Link payment links.

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

use crate::client::{
    AdyenClient, Amount, CheckoutApi, PaymentLinkRequest, UpdatePaymentLinkRequest,
};

use super::super::common::{error_result, payload_result, resolve_merchant_account};

/// Parameters for creating a payment link.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentLinkParams {
    /// Payment amount in minor units.
    #[schemars(description = "Amount in minor units (e.g. 2500 for 25.00 EUR)")]
    pub amount: i64,

    /// Three-letter ISO 4217 currency code.
    #[schemars(description = "Three-letter ISO currency code (e.g. 'EUR')")]
    pub currency: String,

    /// Merchant reference for the payment.
    #[schemars(description = "Your reference for the payment (e.g. an order number)")]
    pub reference: String,

    #[schemars(
        description = "Merchant account to process the payment with; defaults to the configured account"
    )]
    pub merchant_account: Option<String>,

    #[schemars(description = "Description shown to the shopper on the payment page")]
    pub description: Option<String>,

    #[schemars(description = "Two-letter country code of the shopper (e.g. 'NL')")]
    pub country_code: Option<String>,

    #[schemars(description = "Your unique reference for the shopper")]
    pub shopper_reference: Option<String>,

    #[schemars(description = "Email address of the shopper")]
    pub shopper_email: Option<String>,

    #[schemars(description = "ISO 8601 expiry date of the link (e.g. '2026-09-01T12:00:00+02:00')")]
    pub expires_at: Option<String>,
}

/// Create Payment Link tool implementation.
pub struct CreatePaymentLinkTool;

impl CreatePaymentLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_payment_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Creates an Adyen payment link that can be shared with a shopper (Pay by Link). \
         Corresponds to the Checkout API POST /paymentLinks endpoint. Amounts are given in minor \
         units. If merchantAccount is omitted, the server's configured merchant account is used. \
         Example: create_payment_link({amount: 2500, currency: \"EUR\", reference: \"ORDER-123\"}) \
         returns the Adyen payment link object, including the shareable url, or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &CreatePaymentLinkParams, client: &AdyenClient) -> CallToolResult {
        info!("Creating payment link for reference {}", params.reference);

        let request = PaymentLinkRequest {
            amount: Amount {
                currency: params.currency.clone(),
                value: params.amount,
            },
            reference: params.reference.clone(),
            merchant_account: resolve_merchant_account(&params.merchant_account, client),
            description: params.description.clone(),
            country_code: params.country_code.clone(),
            shopper_reference: params.shopper_reference.clone(),
            shopper_email: params.shopper_email.clone(),
            expires_at: params.expires_at.clone(),
        };

        match CheckoutApi::new(client).create_payment_link(&request).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to create payment link. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreatePaymentLinkParams>(),
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
                let params: CreatePaymentLinkParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for retrieving a payment link.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPaymentLinkParams {
    /// Unique identifier of the payment link.
    #[schemars(description = "Unique identifier of the payment link (e.g. 'PL61C53A8B97E6915A')")]
    pub id: String,
}

/// Get Payment Link tool implementation.
pub struct GetPaymentLinkTool;

impl GetPaymentLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_payment_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the status and details of a payment link. Corresponds to the Checkout API \
         GET /paymentLinks/{id} endpoint. \
         Example: get_payment_link({id: \"PL61C53A8B97E6915A\"}) returns the Adyen payment \
         link object, including its status, or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &GetPaymentLinkParams, client: &AdyenClient) -> CallToolResult {
        info!("Getting payment link {}", params.id);

        match CheckoutApi::new(client).get_payment_link(&params.id).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get payment link. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPaymentLinkParams>(),
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
                let params: GetPaymentLinkParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for updating a payment link.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePaymentLinkParams {
    /// Unique identifier of the payment link.
    #[schemars(description = "Unique identifier of the payment link")]
    pub id: String,

    /// New status of the payment link.
    #[schemars(description = "New status; 'expired' is the only value Adyen accepts")]
    pub status: String,
}

/// Update Payment Link tool implementation.
pub struct UpdatePaymentLinkTool;

impl UpdatePaymentLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_payment_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Updates the status of a payment link; used to force the expiry of an active link. \
         Corresponds to the Checkout API PATCH /paymentLinks/{id} endpoint. 'expired' is the \
         only status Adyen accepts. \
         Example: update_payment_link({id: \"PL61C53A8B97E6915A\", status: \"expired\"}) \
         returns the updated payment link object or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &UpdatePaymentLinkParams, client: &AdyenClient) -> CallToolResult {
        info!("Updating payment link {} to {}", params.id, params.status);

        let request = UpdatePaymentLinkRequest {
            status: params.status.clone(),
        };

        match CheckoutApi::new(client)
            .update_payment_link(&params.id, &request)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to update payment link. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdatePaymentLinkParams>(),
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
                let params: UpdatePaymentLinkParams =
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
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_create_params_require_amount() {
        let json = r#"{"currency": "EUR", "reference": "ORDER-1"}"#;
        let result = serde_json::from_str::<CreatePaymentLinkParams>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_params_optionals_default_to_absent() {
        let json = r#"{"amount": 2500, "currency": "EUR", "reference": "ORDER-1"}"#;
        let params: CreatePaymentLinkParams = serde_json::from_str(json).unwrap();
        assert!(params.merchant_account.is_none());
        assert!(params.description.is_none());
        assert!(params.expires_at.is_none());
    }

    #[test]
    fn test_create_params_accept_camel_case() {
        let json = r#"{"amount": 100, "currency": "EUR", "reference": "R",
                       "merchantAccount": "Other", "countryCode": "NL"}"#;
        let params: CreatePaymentLinkParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.merchant_account.as_deref(), Some("Other"));
        assert_eq!(params.country_code.as_deref(), Some("NL"));
    }

    #[tokio::test]
    async fn test_create_falls_back_to_configured_merchant_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/paymentLinks"))
            .and(body_partial_json(
                serde_json::json!({"merchantAccount": "TestMerchant"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "PL61C53A8B97E6915A",
                "url": "https://test.adyen.link/PL61C53A8B97E6915A"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params: CreatePaymentLinkParams = serde_json::from_str(
            r#"{"amount": 2500, "currency": "EUR", "reference": "ORDER-1"}"#,
        )
        .unwrap();

        let result = CreatePaymentLinkTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(false));
        let payload = result.structured_content.unwrap();
        assert_eq!(payload["id"], "PL61C53A8B97E6915A");
    }

    #[test]
    fn test_update_params_require_status() {
        let json = r#"{"id": "PL61C53A8B97E6915A"}"#;
        let result = serde_json::from_str::<UpdatePaymentLinkParams>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = CreatePaymentLinkTool::to_tool();
        assert_eq!(tool.name, "create_payment_link");
        assert!(tool.description.unwrap().contains("POST /paymentLinks"));
    }
}
