//! Management API sub-client.
//!
//! Merchant accounts and payment terminals.

use serde::Serialize;
use serde_json::Value;

use super::{AdyenClient, ClientResult};

/// Query parameters for `GET /merchants`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMerchantAccountsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query parameters for `GET /terminals`.
///
/// `search_query` and `otp_query` each make Adyen ignore the remaining
/// filters; the client forwards whatever the caller supplied and leaves
/// that precedence to the platform.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTerminalsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_models: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Request body for `POST /terminals/{terminalId}/reassign`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTerminalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<bool>,
}

/// Management API scoped view of an [`AdyenClient`].
pub struct ManagementApi<'a> {
    client: &'a AdyenClient,
}

impl<'a> ManagementApi<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.client.endpoints().management, path)
    }

    pub async fn list_merchant_accounts(
        &self,
        query: &ListMerchantAccountsQuery,
    ) -> ClientResult<Value> {
        self.client.get_query(&self.url("/merchants"), query).await
    }

    pub async fn get_merchant_account(&self, merchant_id: &str) -> ClientResult<Value> {
        self.client
            .get(&self.url(&format!("/merchants/{merchant_id}")))
            .await
    }

    pub async fn list_terminals(&self, query: &ListTerminalsQuery) -> ClientResult<Value> {
        self.client.get_query(&self.url("/terminals"), query).await
    }

    pub async fn reassign_terminal(
        &self,
        terminal_id: &str,
        request: &ReassignTerminalRequest,
    ) -> ClientResult<Value> {
        self.client
            .post(&self.url(&format!("/terminals/{terminal_id}/reassign")), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals_query_forwards_only_supplied_filters() {
        let query = ListTerminalsQuery {
            search_query: Some("P400".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "searchQuery=P400"
        );
    }

    #[test]
    fn test_terminals_query_empty_when_unfiltered() {
        let query = ListTerminalsQuery::default();
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "");
    }

    #[test]
    fn test_terminals_query_camel_case_names() {
        let query = ListTerminalsQuery {
            merchant_ids: Some("M1".to_string()),
            brand_models: Some("Verifone.P400".to_string()),
            page_number: Some(2),
            page_size: Some(50),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "merchantIds=M1&brandModels=Verifone.P400&pageNumber=2&pageSize=50"
        );
    }

    #[test]
    fn test_reassign_request_omits_absent_fields() {
        let request = ReassignTerminalRequest {
            store_id: Some("ST123".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        let fields: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(fields, ["storeId"]);
    }
}
