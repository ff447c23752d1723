//! Tool definitions module.
//!
//! This module exports all available tool definitions, organized in one
//! directory per Adyen API surface with one file per resource.

pub mod balance;
pub mod checkout;
mod common;
pub mod lem;
pub mod management;

pub use balance::GetAccountHolderTool;
pub use checkout::{
    CancelPaymentTool, CreatePaymentLinkTool, CreatePaymentSessionTool, GetPaymentLinkTool,
    GetPaymentMethodsTool, GetPaymentSessionTool, RefundPaymentTool, UpdatePaymentLinkTool,
};
pub use lem::{CreateOnboardingLinkTool, GetLegalEntityTool};
pub use management::{
    GetMerchantAccountTool, GetTerminalsTool, ListMerchantAccountsTool, ReassignTerminalTool,
};
