use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to a cargo item nested in a boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CargoRefDto {
    pub id: i32,
    #[serde(rename = "self")]
    pub self_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoatDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub length: i32,
    pub owner: String,
    pub cargo: Vec<CargoRefDto>,
    #[serde(rename = "self")]
    pub self_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoatListDto {
    pub boats: Vec<BoatDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub count: u64,
}

/// Request body for creating or updating a boat.
///
/// Every field is optional at the wire level so that handlers can answer a
/// missing attribute with their own message. Unknown fields are rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BoatPayloadDto {
    /// Present only to reject attempts to change the boat id.
    #[schema(value_type = Option<i32>)]
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub length: Option<i32>,
}
