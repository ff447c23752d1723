//! Payment modification tools.
//!
//! Refund and cancel captured or authorised payments.

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

use crate::client::{AdyenClient, Amount, CheckoutApi, PaymentModificationRequest};

use super::super::common::{error_result, payload_result, resolve_merchant_account};

/// Parameters for refunding a payment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundPaymentParams {
    /// PSP reference of the payment to refund.
    #[schemars(description = "The pspReference of the payment to refund")]
    pub psp_reference: String,

    /// Amount to refund in minor units.
    #[schemars(description = "Amount to refund in minor units")]
    pub amount: i64,

    /// Three-letter ISO 4217 currency code of the original payment.
    #[schemars(description = "Three-letter ISO currency code of the original payment")]
    pub currency: String,

    #[schemars(
        description = "Merchant account the payment was processed with; defaults to the configured account"
    )]
    pub merchant_account: Option<String>,

    #[schemars(description = "Your reference for the refund")]
    pub reference: Option<String>,
}

/// Refund Payment tool implementation.
pub struct RefundPaymentTool;

impl RefundPaymentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "refund_payment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Refunds a captured payment, fully or partially. Corresponds to the Checkout API \
         POST /payments/{pspReference}/refunds endpoint. Amounts are given in minor units; \
         the currency must match the original payment. \
         Example: refund_payment({pspReference: \"993617894906488A\", amount: 2500, \
         currency: \"EUR\"}) returns the Adyen refund response, including the refund's own \
         pspReference, or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &RefundPaymentParams, client: &AdyenClient) -> CallToolResult {
        info!("Refunding payment {}", params.psp_reference);

        let request = PaymentModificationRequest {
            merchant_account: resolve_merchant_account(&params.merchant_account, client),
            amount: Some(Amount {
                currency: params.currency.clone(),
                value: params.amount,
            }),
            reference: params.reference.clone(),
        };

        match CheckoutApi::new(client)
            .refund_payment(&params.psp_reference, &request)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to refund payment. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RefundPaymentParams>(),
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
                let params: RefundPaymentParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Parameters for cancelling a payment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelPaymentParams {
    /// PSP reference of the payment to cancel.
    #[schemars(description = "The pspReference of the authorised payment to cancel")]
    pub psp_reference: String,

    #[schemars(
        description = "Merchant account the payment was processed with; defaults to the configured account"
    )]
    pub merchant_account: Option<String>,

    #[schemars(description = "Your reference for the cancellation")]
    pub reference: Option<String>,
}

/// Cancel Payment tool implementation.
pub struct CancelPaymentTool;

impl CancelPaymentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "cancel_payment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Cancels an authorised payment that has not yet been captured. Corresponds to the \
         Checkout API POST /payments/{pspReference}/cancels endpoint. \
         Example: cancel_payment({pspReference: \"993617894906488A\"}) returns the Adyen \
         cancellation response or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &CancelPaymentParams, client: &AdyenClient) -> CallToolResult {
        info!("Cancelling payment {}", params.psp_reference);

        let request = PaymentModificationRequest {
            merchant_account: resolve_merchant_account(&params.merchant_account, client),
            amount: None,
            reference: params.reference.clone(),
        };

        match CheckoutApi::new(client)
            .cancel_payment(&params.psp_reference, &request)
            .await
        {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to cancel payment. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CancelPaymentParams>(),
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
                let params: CancelPaymentParams =
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
    fn test_refund_params_require_psp_reference() {
        let json = r#"{"amount": 2500, "currency": "EUR"}"#;
        let result = serde_json::from_str::<RefundPaymentParams>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_cancel_params_required_only() {
        let json = r#"{"pspReference": "993617894906488A"}"#;
        let params: CancelPaymentParams = serde_json::from_str(json).unwrap();
        assert!(params.merchant_account.is_none());
        assert!(params.reference.is_none());
    }

    #[tokio::test]
    async fn test_refund_rejection_returns_prefixed_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/993617894906488A/refunds"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "status": 422,
                "errorCode": "167",
                "message": "Original pspReference required for this operation",
                "errorType": "validation"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let params: RefundPaymentParams = serde_json::from_str(
            r#"{"pspReference": "993617894906488A", "amount": 2500, "currency": "EUR"}"#,
        )
        .unwrap();

        let result = RefundPaymentTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(true));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.starts_with("Failed to refund payment. Error: "));
        assert!(text.contains("\"errorCode\":\"167\""));
    }
}
