use axum::{
    extract::{Query, State},
    Json,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::{BaseResponse, ErrorResponse};

use super::dto::{
    ParticipantVotesQuery, SuccessToggleVoteResponse, SuccessVoteListResponse, ToggleVoteRequest,
    ToggleVoteResponse, VoteItem,
};
use super::service::VoteService;

/// Toggles the caller's vote on a card.
#[utoipa::path(
    post,
    path = "/api/v1/votes/toggle",
    request_body = ToggleVoteRequest,
    responses(
        (status = 200, description = "Vote added or removed", body = SuccessToggleVoteResponse),
        (status = 400, description = "Participant does not belong to the card's retrospective", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse),
        (status = 409, description = "Vote limit reached", body = ErrorResponse)
    ),
    tag = "Vote"
)]
pub async fn toggle_vote(
    State(state): State<AppState>,
    Json(req): Json<ToggleVoteRequest>,
) -> Result<Json<BaseResponse<ToggleVoteResponse>>, AppError> {
    let result = VoteService::toggle(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Lists one participant's votes within one retrospective.
#[utoipa::path(
    get,
    path = "/api/v1/votes",
    params(
        ("participantId" = i64, Query, description = "Participant id"),
        ("retrospectiveId" = i64, Query, description = "Retrospective id")
    ),
    responses(
        (status = 200, description = "The participant's votes", body = SuccessVoteListResponse)
    ),
    tag = "Vote"
)]
pub async fn get_participant_votes(
    State(state): State<AppState>,
    Query(query): Query<ParticipantVotesQuery>,
) -> Result<Json<BaseResponse<Vec<VoteItem>>>, AppError> {
    let result =
        VoteService::get_participant_votes(state, query.participant_id, query.retrospective_id)
            .await?;

    Ok(Json(BaseResponse::success(result)))
}
