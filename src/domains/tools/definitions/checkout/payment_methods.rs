//! Payment methods tool.
//!
//! Lists the payment methods available for a merchant account.

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

use crate::client::{AdyenClient, Amount, CheckoutApi, PaymentMethodsRequest};

use super::super::common::{error_result, payload_result, resolve_merchant_account};

/// Parameters for listing available payment methods.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentMethodsParams {
    #[schemars(
        description = "Merchant account to query; defaults to the configured account"
    )]
    pub merchant_account: Option<String>,

    #[schemars(description = "Two-letter country code of the shopper (e.g. 'NL')")]
    pub country_code: Option<String>,

    #[schemars(description = "Sales channel: 'Web', 'iOS', or 'Android'")]
    pub channel: Option<String>,

    /// Both amount and currency must be supplied for amount-based filtering.
    #[schemars(description = "Transaction amount in minor units; requires currency")]
    pub amount: Option<i64>,

    #[schemars(description = "Three-letter ISO currency code; requires amount")]
    pub currency: Option<String>,

    #[schemars(description = "Locale of the shopper (e.g. 'nl-NL')")]
    pub shopper_locale: Option<String>,
}

/// Get Payment Methods tool implementation.
pub struct GetPaymentMethodsTool;

impl GetPaymentMethodsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_payment_methods";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Lists the payment methods available for a merchant account, optionally filtered \
         by country, channel, and amount. Corresponds to the Checkout API POST /paymentMethods \
         endpoint. No parameters are required; amount-based filtering needs both amount and \
         currency. \
         Example: get_payment_methods({countryCode: \"NL\"}) returns the Adyen payment \
         methods object or an error message.";

    /// Execute the tool logic: one Checkout API call.
    pub async fn execute(params: &GetPaymentMethodsParams, client: &AdyenClient) -> CallToolResult {
        info!("Listing payment methods");

        // The vendor amount object needs both halves of the pair.
        let amount = match (&params.amount, &params.currency) {
            (Some(value), Some(currency)) => Some(Amount {
                currency: currency.clone(),
                value: *value,
            }),
            _ => None,
        };

        let request = PaymentMethodsRequest {
            merchant_account: resolve_merchant_account(&params.merchant_account, client),
            amount,
            country_code: params.country_code.clone(),
            channel: params.channel.clone(),
            shopper_locale: params.shopper_locale.clone(),
        };

        match CheckoutApi::new(client).payment_methods(&request).await {
            Ok(payload) => payload_result(payload),
            Err(e) => error_result(&format!("Failed to get payment methods. Error: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPaymentMethodsParams>(),
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
                let params: GetPaymentMethodsParams =
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
    fn test_params_all_optional() {
        let params: GetPaymentMethodsParams = serde_json::from_str("{}").unwrap();
        assert!(params.merchant_account.is_none());
        assert!(params.amount.is_none());
    }

    #[test]
    fn test_params_reject_wrong_type() {
        let json = r#"{"amount": "not-a-number"}"#;
        let result = serde_json::from_str::<GetPaymentMethodsParams>(json);
        assert!(result.is_err());
    }
}
