//! Checkout API tools.
//!
//! Payment links, payment sessions, payment methods, and payment
//! modifications (refund, cancel).

pub mod modifications;
pub mod payment_links;
pub mod payment_methods;
pub mod sessions;

pub use modifications::{CancelPaymentTool, RefundPaymentTool};
pub use payment_links::{CreatePaymentLinkTool, GetPaymentLinkTool, UpdatePaymentLinkTool};
pub use payment_methods::GetPaymentMethodsTool;
pub use sessions::{CreatePaymentSessionTool, GetPaymentSessionTool};
