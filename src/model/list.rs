use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListDto {
    pub id: Uuid,
    /// Public id of the board the list belongs to.
    pub board_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateListDto {
    /// Optional client-chosen public id; generated when omitted.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub board_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateListDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lists of a board in display order, together with the stored order they were sorted by.
///
/// `positions` is returned as stored and may still reference lists that no longer exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListWithOrderDto {
    pub positions: Vec<Uuid>,
    pub lists: Vec<ListDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateListPositionsDto {
    pub positions: Vec<Uuid>,
}
