use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::retrospective::dto::SuccessEmptyResponse;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::{BaseResponse, ErrorResponse};

use super::dto::{
    CardItem, CreateCardRequest, CreateCardResponse, DeleteCardRequest, SuccessCardListResponse,
    SuccessCreateCardResponse, UpdateCardRequest,
};
use super::service::CardService;

/// Lists a retrospective's cards with author names resolved.
#[utoipa::path(
    get,
    path = "/api/v1/retrospectives/{retrospectiveId}/cards",
    params(("retrospectiveId" = i64, Path, description = "Retrospective id")),
    responses(
        (status = 200, description = "Cards with author names", body = SuccessCardListResponse)
    ),
    tag = "Card"
)]
pub async fn get_by_retrospective(
    State(state): State<AppState>,
    Path(retrospective_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<CardItem>>>, AppError> {
    let result = CardService::get_by_retrospective(state, retrospective_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Posts a feedback card.
#[utoipa::path(
    post,
    path = "/api/v1/cards",
    request_body = CreateCardRequest,
    responses(
        (status = 200, description = "Card created", body = SuccessCreateCardResponse),
        (status = 400, description = "Participant does not belong to the retrospective", body = ErrorResponse)
    ),
    tag = "Card"
)]
pub async fn create_card(
    State(state): State<AppState>,
    Json(req): Json<CreateCardRequest>,
) -> Result<Json<BaseResponse<CreateCardResponse>>, AppError> {
    let result = CardService::create(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edits a card's content. Author only.
#[utoipa::path(
    patch,
    path = "/api/v1/cards/{cardId}",
    params(("cardId" = i64, Path, description = "Card id")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card updated", body = SuccessEmptyResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse)
    ),
    tag = "Card"
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
    Json(req): Json<UpdateCardRequest>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    CardService::update(state, card_id, req).await?;

    Ok(Json(BaseResponse::success(())))
}

/// Deletes a card and its votes. Author only.
#[utoipa::path(
    delete,
    path = "/api/v1/cards/{cardId}",
    params(("cardId" = i64, Path, description = "Card id")),
    request_body = DeleteCardRequest,
    responses(
        (status = 200, description = "Card deleted", body = SuccessEmptyResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse)
    ),
    tag = "Card"
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
    Json(req): Json<DeleteCardRequest>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    CardService::remove(state, card_id, req.participant_id).await?;

    Ok(Json(BaseResponse::success(())))
}
