use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CargoDto {
    pub id: i32,
    pub volume: i32,
    pub content: String,
    #[serde(rename = "creationDate")]
    pub creation_date: String,
    pub carrier: Option<i32>,
    #[serde(rename = "self")]
    pub self_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CargoListDto {
    pub cargo: Vec<CargoDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub count: u64,
}

/// Request body for creating or updating cargo.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CargoPayloadDto {
    pub volume: Option<i32>,
    pub content: Option<String>,
    #[serde(rename = "creationDate")]
    pub creation_date: Option<String>,
}
