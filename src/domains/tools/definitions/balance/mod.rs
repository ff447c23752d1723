//! Balance Platform Configuration API tools.
//!
//! Account holders.

pub mod account_holders;

pub use account_holders::GetAccountHolderTool;
