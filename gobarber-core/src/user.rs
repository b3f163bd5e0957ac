use serde::{Deserialize, Serialize};

/// The authenticated user (or an appointment's customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`, shared by sign-up and profile edit.
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub password: String,
}
