//! Authentication mode descriptor.

use serde::{Deserialize, Serialize};

/// How the external auth flow authenticates against the Arkane login realm.
///
/// Pure data: the client id registered with Arkane and the OAuth grant type
/// used against the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthenticationMode {
    /// OAuth client identifier issued by Arkane
    pub client_id: String,
    /// Grant type, e.g. `password`
    pub grant: String,
}

impl AuthenticationMode {
    /// Client id used until a real one is configured.
    pub const PLACEHOLDER_CLIENT_ID: &'static str = "<client id>";

    /// Grant type used when none is configured.
    pub const DEFAULT_GRANT: &'static str = "password";

    /// Create an authentication mode.
    #[must_use]
    pub fn new(client_id: impl Into<String>, grant: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            grant: grant.into(),
        }
    }

    /// Whether the client id is still the unconfigured placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.client_id == Self::PLACEHOLDER_CLIENT_ID
    }
}

impl Default for AuthenticationMode {
    fn default() -> Self {
        Self::new(Self::PLACEHOLDER_CLIENT_ID, Self::DEFAULT_GRANT)
    }
}
