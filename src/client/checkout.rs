//! Checkout API sub-client.
//!
//! Payment links, payment sessions, payment methods, and payment
//! modifications (refund, cancel).

use serde::Serialize;
use serde_json::Value;

use super::{AdyenClient, ClientResult};

/// A monetary amount in minor units.
#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    pub currency: String,
    pub value: i64,
}

/// Request body for `POST /paymentLinks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkRequest {
    pub amount: Amount,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Request body for `PATCH /paymentLinks/{id}`.
///
/// The only status Adyen accepts here is "expired".
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePaymentLinkRequest {
    pub status: String,
}

/// Request body for `POST /sessions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub amount: Amount,
    pub reference: String,
    pub return_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_locale: Option<String>,
}

/// Request body for `POST /paymentMethods`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_locale: Option<String>,
}

/// Request body for payment modifications (refunds and cancels).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModificationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Checkout API scoped view of an [`AdyenClient`].
pub struct CheckoutApi<'a> {
    client: &'a AdyenClient,
}

impl<'a> CheckoutApi<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.client.endpoints().checkout, path)
    }

    pub async fn create_payment_link(&self, request: &PaymentLinkRequest) -> ClientResult<Value> {
        self.client.post(&self.url("/paymentLinks"), request).await
    }

    pub async fn get_payment_link(&self, id: &str) -> ClientResult<Value> {
        self.client.get(&self.url(&format!("/paymentLinks/{id}"))).await
    }

    pub async fn update_payment_link(
        &self,
        id: &str,
        request: &UpdatePaymentLinkRequest,
    ) -> ClientResult<Value> {
        self.client
            .patch(&self.url(&format!("/paymentLinks/{id}")), request)
            .await
    }

    pub async fn create_session(&self, request: &SessionRequest) -> ClientResult<Value> {
        self.client.post(&self.url("/sessions"), request).await
    }

    pub async fn get_session(
        &self,
        id: &str,
        session_result: Option<&str>,
    ) -> ClientResult<Value> {
        let url = self.url(&format!("/sessions/{id}"));
        match session_result {
            Some(result) => {
                self.client
                    .get_query(&url, &[("sessionResult", result)])
                    .await
            }
            None => self.client.get(&url).await,
        }
    }

    pub async fn payment_methods(&self, request: &PaymentMethodsRequest) -> ClientResult<Value> {
        self.client.post(&self.url("/paymentMethods"), request).await
    }

    pub async fn refund_payment(
        &self,
        psp_reference: &str,
        request: &PaymentModificationRequest,
    ) -> ClientResult<Value> {
        self.client
            .post(&self.url(&format!("/payments/{psp_reference}/refunds")), request)
            .await
    }

    pub async fn cancel_payment(
        &self,
        psp_reference: &str,
        request: &PaymentModificationRequest,
    ) -> ClientResult<Value> {
        self.client
            .post(&self.url(&format!("/payments/{psp_reference}/cancels")), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_link_request_omits_absent_optionals() {
        let request = PaymentLinkRequest {
            amount: Amount {
                currency: "EUR".to_string(),
                value: 2500,
            },
            reference: "ORDER-1".to_string(),
            merchant_account: Some("TestMerchant".to_string()),
            description: None,
            country_code: None,
            shopper_reference: None,
            shopper_email: None,
            expires_at: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("amount"));
        assert!(fields.contains_key("reference"));
        assert!(fields.contains_key("merchantAccount"));
        assert_eq!(body["amount"]["value"], 2500);
        assert_eq!(body["amount"]["currency"], "EUR");
    }

    #[test]
    fn test_modification_request_camel_case() {
        let request = PaymentModificationRequest {
            merchant_account: Some("TestMerchant".to_string()),
            amount: Some(Amount {
                currency: "USD".to_string(),
                value: 1000,
            }),
            reference: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["merchantAccount"], "TestMerchant");
        assert!(body.get("reference").is_none());
    }

    #[test]
    fn test_payment_methods_request_empty_body() {
        let request = PaymentMethodsRequest::default();
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.as_object().unwrap().is_empty());
    }
}
