//! Adyen API client.
//!
//! There is no official Adyen SDK for Rust, so this module carries a thin
//! asynchronous client for the API surfaces the tools use. A single
//! [`AdyenClient`] holds the HTTP connection pool, the API key, and the
//! per-service endpoint URLs; it is shared read-only by all tool
//! invocations. Narrow sub-clients ([`CheckoutApi`], [`ManagementApi`],
//! [`LegalEntityManagementApi`], [`BalancePlatformApi`]) scope requests to
//! one vendor API and are cheap to construct per call.
//!
//! The client performs no retries and no rate limiting; both are handled by
//! Adyen's platform.

mod balance_platform;
mod checkout;
mod error;
mod legal_entity;
mod management;

pub use balance_platform::BalancePlatformApi;
pub use checkout::{
    Amount, CheckoutApi, PaymentLinkRequest, PaymentMethodsRequest, PaymentModificationRequest,
    SessionRequest, UpdatePaymentLinkRequest,
};
pub use error::{ClientError, ClientResult};
pub use legal_entity::{LegalEntityManagementApi, OnboardingLinkRequest};
pub use management::{
    ListMerchantAccountsQuery, ListTerminalsQuery, ManagementApi, ReassignTerminalRequest,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Adyen platform environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test environment (default).
    #[default]
    Test,
    /// Live environment. Checkout requests additionally need the
    /// account-specific live endpoint URL prefix.
    Live,
}

impl Environment {
    /// Parse an environment name; anything other than "live" is test.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "live" => Self::Live,
            _ => Self::Test,
        }
    }
}

/// Base URLs for the Adyen API surfaces the tools call.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Checkout API (payment links, sessions, modifications).
    pub checkout: String,
    /// Management API (merchant accounts, terminals).
    pub management: String,
    /// Legal Entity Management API (legal entities, onboarding links).
    pub legal_entity: String,
    /// Balance Platform Configuration API (account holders).
    pub balance_platform: String,
}

impl Endpoints {
    /// Resolve the endpoint set for an environment.
    ///
    /// The live Checkout endpoint embeds the account-specific URL prefix;
    /// resolving `Live` without one is a configuration error.
    pub fn for_environment(
        environment: Environment,
        live_prefix: Option<&str>,
    ) -> ClientResult<Self> {
        match environment {
            Environment::Test => Ok(Self {
                checkout: "https://checkout-test.adyen.com/v71".to_string(),
                management: "https://management-test.adyen.com/v3".to_string(),
                legal_entity: "https://kyc-test.adyen.com/lem/v3".to_string(),
                balance_platform: "https://balanceplatform-api-test.adyen.com/bcl/v2".to_string(),
            }),
            Environment::Live => {
                let prefix = live_prefix.filter(|p| !p.is_empty()).ok_or_else(|| {
                    ClientError::config(
                        "ADYEN_LIVE_ENDPOINT_URL_PREFIX is required for the live environment",
                    )
                })?;
                Ok(Self {
                    checkout: format!(
                        "https://{prefix}-checkout-live.adyenpayments.com/checkout/v71"
                    ),
                    management: "https://management-live.adyen.com/v3".to_string(),
                    legal_entity: "https://kyc-live.adyen.com/lem/v3".to_string(),
                    balance_platform: "https://balanceplatform-api-live.adyen.com/bcl/v2"
                        .to_string(),
                })
            }
        }
    }
}

/// Shared Adyen API client.
///
/// Owned by the server, borrowed by tools for the duration of one call.
/// Safe for concurrent use: all state is read-only after construction and
/// the underlying `reqwest::Client` is reentrant.
pub struct AdyenClient {
    http: reqwest::Client,
    api_key: String,
    endpoints: Endpoints,
    merchant_account: Option<String>,
}

impl AdyenClient {
    /// Create a client with an API key and resolved endpoints.
    ///
    /// `merchant_account` is the fallback used by Checkout tools when the
    /// caller does not pass one per invocation.
    pub fn new(
        api_key: impl Into<String>,
        endpoints: Endpoints,
        merchant_account: Option<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            api_key: api_key.into(),
            endpoints,
            merchant_account,
        }
    }

    /// Endpoint URLs this client targets.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The configured fallback merchant account, if any.
    pub fn merchant_account(&self) -> Option<&str> {
        self.merchant_account.as_deref()
    }

    pub(crate) async fn get(&self, url: &str) -> ClientResult<Value> {
        debug!(url, "GET");
        self.send(self.http.get(url)).await
    }

    pub(crate) async fn get_query<Q>(&self, url: &str, query: &Q) -> ClientResult<Value>
    where
        Q: Serialize + ?Sized,
    {
        debug!(url, "GET");
        self.send(self.http.get(url).query(query)).await
    }

    pub(crate) async fn post<B>(&self, url: &str, body: &B) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        debug!(url, "POST");
        self.send(self.http.post(url).json(body)).await
    }

    pub(crate) async fn patch<B>(&self, url: &str, body: &B) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        debug!(url, "PATCH");
        self.send(self.http.patch(url).json(body)).await
    }

    /// Issue one request and normalize the outcome.
    ///
    /// Non-2xx responses become [`ClientError::Api`] carrying the parsed
    /// error body (or the raw text when the body is not JSON). Empty 2xx
    /// bodies map to JSON null.
    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = request.header("x-api-key", &self.api_key).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| Value::String(text));
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) fn test_client(base_url: &str) -> AdyenClient {
        let endpoints = Endpoints {
            checkout: base_url.to_string(),
            management: base_url.to_string(),
            legal_entity: base_url.to_string(),
            balance_platform: base_url.to_string(),
        };
        AdyenClient::new("test_api_key", endpoints, Some("TestMerchant".to_string()))
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("live"), Environment::Live);
        assert_eq!(Environment::parse("LIVE"), Environment::Live);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("anything"), Environment::Test);
    }

    #[test]
    fn test_endpoints_test_environment() {
        let endpoints = Endpoints::for_environment(Environment::Test, None).unwrap();
        assert_eq!(endpoints.checkout, "https://checkout-test.adyen.com/v71");
        assert_eq!(endpoints.management, "https://management-test.adyen.com/v3");
        assert_eq!(endpoints.legal_entity, "https://kyc-test.adyen.com/lem/v3");
        assert_eq!(
            endpoints.balance_platform,
            "https://balanceplatform-api-test.adyen.com/bcl/v2"
        );
    }

    #[test]
    fn test_endpoints_live_requires_prefix() {
        let result = Endpoints::for_environment(Environment::Live, None);
        assert!(matches!(result, Err(ClientError::Config(_))));

        let result = Endpoints::for_environment(Environment::Live, Some(""));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_endpoints_live_with_prefix() {
        let endpoints =
            Endpoints::for_environment(Environment::Live, Some("1797a841fbb37ca7-AdyenDemo"))
                .unwrap();
        assert_eq!(
            endpoints.checkout,
            "https://1797a841fbb37ca7-AdyenDemo-checkout-live.adyenpayments.com/checkout/v71"
        );
        assert_eq!(endpoints.management, "https://management-live.adyen.com/v3");
    }

    #[tokio::test]
    async fn test_send_attaches_api_key_and_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/merchants/M123"))
            .and(header("x-api-key", "test_api_key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "M123"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let url = format!("{}/merchants/M123", server.uri());
        let value = client.get(&url).await.unwrap();
        assert_eq!(value["id"], "M123");
    }

    #[tokio::test]
    async fn test_send_maps_api_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "status": 403,
                "errorCode": "901",
                "message": "Invalid Merchant Account",
                "errorType": "security"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let url = format!("{}/merchants/M123", server.uri());
        let err = client.get(&url).await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body["errorCode"], "901");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let url = format!("{}/terminals/T1/reassign", server.uri());
        let value = client.post(&url, &serde_json::json!({})).await.unwrap();
        assert!(value.is_null());
    }
}
