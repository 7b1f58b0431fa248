use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::vote;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVoteRequest {
    pub card_id: i64,
    pub participant_id: i64,
}

/// Outcome of a toggle: the vote was either added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Added,
    Removed,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVoteResponse {
    pub action: VoteAction,
    /// The card's vote count after the toggle.
    pub vote_count: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessToggleVoteResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ToggleVoteResponse,
}

/// Query parameters for a participant's votes within one retrospective.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantVotesQuery {
    pub participant_id: i64,
    pub retrospective_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteItem {
    pub vote_id: i64,
    pub card_id: i64,
    pub participant_id: i64,
    pub retrospective_id: i64,
}

impl From<vote::Model> for VoteItem {
    fn from(model: vote::Model) -> Self {
        Self {
            vote_id: model.vote_id,
            card_id: model.card_id,
            participant_id: model.participant_id,
            retrospective_id: model.retrospective_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessVoteListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<VoteItem>,
}
