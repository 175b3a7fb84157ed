use serde::{Deserialize, Serialize};

/// Registration payload for a new user account.
///
/// `status` is always sent as `true`; accounts stay unusable until an
/// administrator approves them through the approval endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub status: bool,
}

/// The slice of the created account the backend echoes back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub first_name: String,
    pub last_name: String,
}
