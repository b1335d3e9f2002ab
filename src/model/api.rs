use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error body, `{"Error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[serde(rename = "Error")]
    pub error: String,
}
