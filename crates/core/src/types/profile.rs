//! Authenticated user profile.

use serde::{Deserialize, Serialize};

/// Profile of a user authenticated against the Arkane Network.
///
/// Populated by the external auth flow from the Arkane profile response.
/// Every string field may be absent. Two profiles are equal when their
/// `user_id` matches, whatever the other fields hold. Two profiles that both
/// lack a `user_id` are therefore equal; compare `user_id` with `is_some()`
/// first when anonymous profiles must stay distinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Arkane user identity
    #[serde(default)]
    pub user_id: Option<String>,
    /// Whether the user has set a master PIN
    #[serde(default)]
    pub has_master_pin: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserProfile {
    /// Name to show in UI: "first last" when either part is set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_owned()),
            (None, None) => self.username.clone(),
        }
    }
}

impl PartialEq for UserProfile {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for UserProfile {}
