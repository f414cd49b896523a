//! Environment configuration, resolved once at process start.
//!
//! Everything except the credential has a deployment default, so the
//! service always boots; a missing credential surfaces per request as
//! HTTP 500 rather than as a dead deployment.

use crate::error::RelayError;

/// Environment variable holding the pre-encoded Basic credential.
pub const AUTH_VAR: &str = "EVOCON_AUTH";

/// Checklist that receives the pallet number.
pub const DEFAULT_CHECKLIST_ID: &str = "9897e575-882a-40f3-ad1e-1aad4577dafa";
/// Station recorded alongside each submission.
pub const DEFAULT_STATION_ID: &str = "2";
/// Display name of the checklist in Evocon.
pub const DEFAULT_CHECKLIST_NAME: &str = "ΠΑΛΕΤΑ";
/// Checklist element that stores the pallet number.
pub const DEFAULT_PALLET_ELEMENT_ID: &str = "2";

/// Resolved relay configuration.
///
/// Read once at startup and handed to the handlers; nothing here is
/// re-read per request.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `Base64(username:password)` without the `Basic ` prefix, used
    /// verbatim in the Authorization header.
    pub auth: Option<String>,
    pub checklist_id: String,
    pub station_id: String,
    pub checklist_name: String,
    pub pallet_element_id: String,
}

impl RelayConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary lookup (tests pass a map).
    ///
    /// Empty values count as unset, matching shell exports like
    /// `EVOCON_STATION_ID=`.
    pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| get(name).filter(|v| !v.is_empty());
        Self {
            auth: var(AUTH_VAR),
            checklist_id: var("EVOCON_CHECKLIST_ID")
                .unwrap_or_else(|| DEFAULT_CHECKLIST_ID.to_string()),
            station_id: var("EVOCON_STATION_ID").unwrap_or_else(|| DEFAULT_STATION_ID.to_string()),
            checklist_name: var("EVOCON_CHECKLIST_NAME")
                .unwrap_or_else(|| DEFAULT_CHECKLIST_NAME.to_string()),
            pallet_element_id: var("EVOCON_PALLET_ELEMENT_ID")
                .unwrap_or_else(|| DEFAULT_PALLET_ELEMENT_ID.to_string()),
        }
    }

    /// The configured credential, or the error every submit must report
    /// while it is missing.
    pub fn require_auth(&self) -> Result<&str, RelayError> {
        self.auth.as_deref().ok_or(RelayError::MissingCredential)
    }
}

/// True when the credential decodes as Base64 of a `username:password`
/// pair. Only used for startup warnings; the value is never re-encoded.
pub fn credential_looks_encoded(auth: &str) -> bool {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    match STANDARD.decode(auth) {
        Ok(bytes) => bytes.contains(&b':'),
        Err(_) => false,
    }
}
