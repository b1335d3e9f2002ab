use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub count: u64,
}

/// Shown on the success page after login so the caller can copy the
/// bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginProfileDto {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub token: String,
}
