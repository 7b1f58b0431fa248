use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::auth::{AuthUser, OptionalAuthUser};
use crate::utils::error::AppError;
use crate::utils::{BaseResponse, ErrorResponse};

use super::dto::{
    CreateRetrospectiveRequest, CreateRetrospectiveResponse, JoinRetrospectiveRequest,
    JoinRetrospectiveResponse, ParticipantItem, RetrospectiveItem,
    SuccessCreateRetrospectiveResponse, SuccessEmptyResponse, SuccessJoinRetrospectiveResponse,
    SuccessParticipantListResponse, SuccessRetrospectiveListResponse, SuccessRetrospectiveResponse,
    UpdateSettingsRequest,
};
use super::service::RetrospectiveService;

/// Creates a retrospective owned by the authenticated caller.
#[utoipa::path(
    post,
    path = "/api/v1/retrospectives",
    request_body = CreateRetrospectiveRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Retrospective created", body = SuccessCreateRetrospectiveResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn create_retrospective(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateRetrospectiveRequest>,
) -> Result<Json<BaseResponse<CreateRetrospectiveResponse>>, AppError> {
    req.validate()?;
    let user_id = user.user_id()?;

    let result = RetrospectiveService::create(state, user_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Resolves an invite code. Returns `null` for unknown or ended sessions.
#[utoipa::path(
    get,
    path = "/api/v1/retrospectives/invite/{inviteCode}",
    params(("inviteCode" = String, Path, description = "6-character invite code")),
    responses(
        (status = 200, description = "Retrospective or null", body = SuccessRetrospectiveResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_by_invite_code(
    State(state): State<AppState>,
    Path(invite_code): Path<String>,
) -> Result<Json<BaseResponse<RetrospectiveItem>>, AppError> {
    let result = RetrospectiveService::get_by_invite_code(state, &invite_code).await?;

    Ok(Json(BaseResponse::success_opt(result)))
}

/// Fetches a retrospective by id. Returns `null` when absent.
#[utoipa::path(
    get,
    path = "/api/v1/retrospectives/{retrospectiveId}",
    params(("retrospectiveId" = i64, Path, description = "Retrospective id")),
    responses(
        (status = 200, description = "Retrospective or null", body = SuccessRetrospectiveResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(retrospective_id): Path<i64>,
) -> Result<Json<BaseResponse<RetrospectiveItem>>, AppError> {
    let result = RetrospectiveService::get_by_id(state, retrospective_id).await?;

    Ok(Json(BaseResponse::success_opt(result)))
}

/// Lists the caller's retrospectives, newest first. Unauthenticated callers
/// get an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/retrospectives",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's retrospectives", body = SuccessRetrospectiveListResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_my_retrospectives(
    State(state): State<AppState>,
    user: OptionalAuthUser,
) -> Result<Json<BaseResponse<Vec<RetrospectiveItem>>>, AppError> {
    let user_id = user.user_id()?;

    let result = RetrospectiveService::get_my_retrospectives(state, user_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Joins a retrospective by invite code. Idempotent per session.
#[utoipa::path(
    post,
    path = "/api/v1/retrospectives/join",
    request_body = JoinRetrospectiveRequest,
    responses(
        (status = 200, description = "Joined (or already joined)", body = SuccessJoinRetrospectiveResponse),
        (status = 404, description = "Unknown or inactive invite code", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn join_as_participant(
    State(state): State<AppState>,
    Json(req): Json<JoinRetrospectiveRequest>,
) -> Result<Json<BaseResponse<JoinRetrospectiveResponse>>, AppError> {
    req.validate()?;

    let result = RetrospectiveService::join_as_participant(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Lists a retrospective's participants.
#[utoipa::path(
    get,
    path = "/api/v1/retrospectives/{retrospectiveId}/participants",
    params(("retrospectiveId" = i64, Path, description = "Retrospective id")),
    responses(
        (status = 200, description = "Participants", body = SuccessParticipantListResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Path(retrospective_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<ParticipantItem>>>, AppError> {
    let result = RetrospectiveService::get_participants(state, retrospective_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Updates the vote budget. Moderator only.
#[utoipa::path(
    patch,
    path = "/api/v1/retrospectives/{retrospectiveId}/settings",
    params(("retrospectiveId" = i64, Path, description = "Retrospective id")),
    request_body = UpdateSettingsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Settings updated", body = SuccessEmptyResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller is not the moderator", body = ErrorResponse),
        (status = 404, description = "Retrospective not found", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    user: AuthUser,
    Path(retrospective_id): Path<i64>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    req.validate()?;
    let user_id = user.user_id()?;

    RetrospectiveService::update_settings(state, user_id, retrospective_id, req).await?;

    Ok(Json(BaseResponse::success(())))
}

/// Ends a retrospective permanently. Moderator only.
#[utoipa::path(
    post,
    path = "/api/v1/retrospectives/{retrospectiveId}/end",
    params(("retrospectiveId" = i64, Path, description = "Retrospective id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Retrospective ended", body = SuccessEmptyResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller is not the moderator", body = ErrorResponse),
        (status = 404, description = "Retrospective not found", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn end_retrospective(
    State(state): State<AppState>,
    user: AuthUser,
    Path(retrospective_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let user_id = user.user_id()?;

    RetrospectiveService::end_retrospective(state, user_id, retrospective_id).await?;

    Ok(Json(BaseResponse::success(())))
}
