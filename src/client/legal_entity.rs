//! Legal Entity Management API sub-client.
//!
//! Legal entities and hosted onboarding links.

use serde::Serialize;
use serde_json::Value;

use super::{AdyenClient, ClientResult};

/// Request body for `POST /legalEntities/{id}/onboardingLinks`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Legal Entity Management API scoped view of an [`AdyenClient`].
pub struct LegalEntityManagementApi<'a> {
    client: &'a AdyenClient,
}

impl<'a> LegalEntityManagementApi<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.client.endpoints().legal_entity, path)
    }

    pub async fn get_legal_entity(&self, id: &str) -> ClientResult<Value> {
        self.client
            .get(&self.url(&format!("/legalEntities/{id}")))
            .await
    }

    pub async fn create_onboarding_link(
        &self,
        legal_entity_id: &str,
        request: &OnboardingLinkRequest,
    ) -> ClientResult<Value> {
        self.client
            .post(
                &self.url(&format!("/legalEntities/{legal_entity_id}/onboardingLinks")),
                request,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_link_request_omits_absent_fields() {
        let request = OnboardingLinkRequest {
            redirect_url: Some("https://example.com/done".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        let fields: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(fields, ["redirectUrl"]);
    }

    #[test]
    fn test_onboarding_link_request_empty_body() {
        let body = serde_json::to_value(OnboardingLinkRequest::default()).unwrap();
        assert!(body.as_object().unwrap().is_empty());
    }
}
