//! Login flow models.

use crate::model::user::LoginProfileDto;

/// Profile stored in the session after a successful OAuth callback.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoginProfile {
    pub display_name: String,
    /// Subject identifier of the signed-in user.
    pub user_id: String,
    /// ID token the user presents as a bearer token.
    pub token: String,
}

impl LoginProfile {
    pub fn into_dto(self) -> LoginProfileDto {
        LoginProfileDto {
            display_name: self.display_name,
            user_id: self.user_id,
            token: self.token,
        }
    }
}
