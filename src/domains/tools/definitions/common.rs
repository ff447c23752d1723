//! Common result helpers shared across Adyen tools.
//!
//! Every tool resolves to one of three shapes: the raw vendor payload
//! (reads and creates), a synthesized confirmation string (pure actions
//! with no response body), or a prefixed error message. Success and
//! failure are tagged with `CallToolResult::is_error`, never by the shape
//! of the returned value.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::client::AdyenClient;

/// Wrap a raw Adyen response as a successful tool result.
///
/// The payload is returned unmodified: the raw value as structured
/// content, its pretty-printed JSON as the text content.
pub fn payload_result(payload: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(payload),
        is_error: Some(false),
        meta: None,
    }
}

/// Create a success result carrying only a confirmation message.
pub fn confirmation_result(message: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Resolve the merchant account for a Checkout call.
///
/// The caller's argument wins; the client's configured fallback applies
/// otherwise. `None` is forwarded as-is and rejected by Adyen.
pub fn resolve_merchant_account(argument: &Option<String>, client: &AdyenClient) -> Option<String> {
    argument
        .clone()
        .or_else(|| client.merchant_account().map(str::to_string))
}
