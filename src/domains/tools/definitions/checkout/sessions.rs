//! Payment session tools.
//!
//! Create Checkout payment sessions and look up their result.

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

use crate::client::{AdyenClient, Amount, CheckoutApi, SessionRequest};

use super::super::common::{error_result, payload_result, resolve_merchant_account};

/// Parameters for creating a payment session.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentSessionParams {
    /// Payment amount in minor units.
    #[schemars(description = "Amount in minor units (e.g. 1000 for 10.00 EUR)")]
    pub amount: i64,

    /// Three-letter ISO 4217 currency code.
    #[schemars(description = "Three-letter ISO currency code (e.g. 'EUR')")]
    pub currency: String,

    /// Merchant reference for the payment.
    #[schemars(description = "Your reference for the payment (e.g. an order number)")]
    pub reference: String,

    /// URL the shopper returns to after the payment.
    #[schemars(description = "URL the shopper is redirected to after completing the payment")]
    pub return_url: String,

    #[schemars(
        description = "Merchant account to process the payment with; defaults to the configured account"
    )]
    pub merchant_account: Option<String>,

    #[schemars(description = "Two-letter country code of the shopper (e.g. 'NL')")]
    pub country_code: Option<String>,

    #[schemars(description = "Sales channel: 'Web', 'iOS', or 'Android'")]
    pub channel: Option<String>,

    #[schemars(description = "Your unique reference for the shopper")]
    pub shopper_reference: Option<String>,

    #[schemars(description = "Email address of the shopper")]
    pub shopper_email: Option<String>,

    #[schemars(description = "Locale for the payment page (e.g. 'nl-NL')")]
    pub shopper_locale: Option<String>,
}

/// Create Payment Session tool implementation.
pub struct CreatePaymentSessionTool;

impl CreatePaymentSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_payment_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Creates an Adyen payment session for Drop-in or Components integrations. \
         Corresponds to the Checkout API POST /sessions endpoint. Amounts are given in minor \
         units. If merchantAccount is omitted, the server's configured merchant account is used. \
         Example: create_payment_session({amount: 1000, currency: \"EUR\", reference: \"ORDER-7\", \
         returnUrl: \"https://example.com/checkout\"}) returns the session object, including \
         sessionData, or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(
        params: &CreatePaymentSessionParams,
        client: &AdyenClient,
    ) -> CallToolResult {
        info!("Creating payment session for reference {}", params.reference);

        let request = SessionRequest {
            amount: Amount {
                currency: params.currency.clone(),
                value: params.amount,
            },
            reference: params.reference.clone(),
            return_url: params.return_url.clone(),
            merchant_account: resolve_merchant_account(&params.merchant_account, client),
            country_code: params.country_code.clone(),
            channel: params.channel.clone(),
            shopper_reference: params.shopper_reference.clone(),
            shopper_email: params.shopper_email.clone(),
            shopper_locale: params.shopper_locale.clone(),
        };

        match CheckoutApi::new(client).create_session(&request).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to create payment session. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreatePaymentSessionParams>(),
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
                let params: CreatePaymentSessionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for retrieving a payment session.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentSessionParams {
    /// Unique identifier of the payment session.
    #[schemars(description = "Unique identifier of the payment session (e.g. 'CS451F2AB1ED897A94')")]
    pub id: String,

    #[schemars(description = "The sessionResult value returned to the shopper's return URL")]
    pub session_result: Option<String>,
}

/// Get Payment Session tool implementation.
pub struct GetPaymentSessionTool;

impl GetPaymentSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_payment_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the status of a payment session. Corresponds to the Checkout API \
         GET /sessions/{id} endpoint; pass the sessionResult value when available to \
         retrieve the outcome of a completed session. \
         Example: get_payment_session({id: \"CS451F2AB1ED897A94\"}) returns the session \
         status object or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &GetPaymentSessionParams, client: &AdyenClient) -> CallToolResult {
        info!("Getting payment session {}", params.id);

        match CheckoutApi::new(client)
            .get_session(&params.id, params.session_result.as_deref())
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get payment session. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPaymentSessionParams>(),
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
                let params: GetPaymentSessionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
