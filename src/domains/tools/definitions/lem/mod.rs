//! Legal Entity Management API tools.
//!
//! Legal entities and hosted onboarding links.

pub mod legal_entities;
pub mod onboarding_links;

pub use legal_entities::GetLegalEntityTool;
pub use onboarding_links::CreateOnboardingLinkTool;
