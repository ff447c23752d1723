//! Balance Platform Configuration API sub-client.
//!
//! Account holders.

use serde_json::Value;

use super::{AdyenClient, ClientResult};

/// Balance Platform Configuration API scoped view of an [`AdyenClient`].
pub struct BalancePlatformApi<'a> {
    client: &'a AdyenClient,
}

impl<'a> BalancePlatformApi<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.client.endpoints().balance_platform, path)
    }

    pub async fn get_account_holder(&self, id: &str) -> ClientResult<Value> {
        self.client
            .get(&self.url(&format!("/accountHolders/{id}")))
            .await
    }
}
