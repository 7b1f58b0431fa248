use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::card::{self, CardCategory};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub retrospective_id: i64,
    pub participant_id: i64,
    pub category: CardCategory,
    /// Caller contract: clients trim input and reject empty strings before
    /// calling; this layer stores content as given.
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardResponse {
    pub card_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCreateCardResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: CreateCardResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub participant_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCardRequest {
    pub participant_id: i64,
}

/// Card as shown on the board, with the author's current anonymous name
/// resolved at read time.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub card_id: i64,
    pub retrospective_id: i64,
    pub participant_id: i64,
    pub category: CardCategory,
    pub content: String,
    pub vote_count: i32,
    pub participant_name: String,
    pub created_at: String,
}

impl CardItem {
    pub fn from_model(model: card::Model, participant_name: String) -> Self {
        Self {
            card_id: model.card_id,
            retrospective_id: model.retrospective_id,
            participant_id: model.participant_id,
            category: model.category,
            content: model.content,
            vote_count: model.vote_count,
            participant_name,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCardListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<CardItem>,
}
