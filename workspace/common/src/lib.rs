//! Common transport-layer types shared between the HTTP handlers and the
//! service layer. Nothing in here touches the database; the SeaORM entities
//! convert to and from these shapes at the model boundary.

mod patch;
mod provider;

pub use patch::Patch;
pub use provider::{ParseProviderError, Provider};

/// Provider-specific account settings (tokens, channel ids, page ids, ...).
///
/// Always a JSON object; its keys are not validated here.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
