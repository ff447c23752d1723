//! Management API tools.
//!
//! Merchant accounts and payment terminals.

pub mod merchants;
pub mod terminals;

pub use merchants::{GetMerchantAccountTool, ListMerchantAccountsTool};
pub use terminals::{GetTerminalsTool, ReassignTerminalTool};
