use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::{participant, retrospective};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetrospectiveRequest {
    #[validate(length(min = 1, max = 60, message = "Name must be 1-60 characters."))]
    pub name: String,

    #[validate(range(min = 1, message = "votesPerParticipant must be at least 1."))]
    pub votes_per_participant: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetrospectiveResponse {
    pub retrospective_id: i64,
    pub invite_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCreateRetrospectiveResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: CreateRetrospectiveResponse,
}

/// Public view of a retrospective.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveItem {
    pub retrospective_id: i64,
    pub name: String,
    pub moderator_id: i64,
    pub votes_per_participant: i32,
    pub is_active: bool,
    pub invite_code: String,
    pub created_at: String,
}

impl From<retrospective::Model> for RetrospectiveItem {
    fn from(model: retrospective::Model) -> Self {
        Self {
            retrospective_id: model.retrospective_id,
            name: model.name,
            moderator_id: model.moderator_id,
            votes_per_participant: model.votes_per_participant,
            is_active: model.is_active,
            invite_code: model.invite_code,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRetrospectiveResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<RetrospectiveItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRetrospectiveListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<RetrospectiveItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRetrospectiveRequest {
    #[validate(length(equal = 6, message = "Invite code must be exactly 6 characters."))]
    pub invite_code: String,

    #[validate(length(min = 1, max = 128, message = "sessionId must be 1-128 characters."))]
    pub session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRetrospectiveResponse {
    pub participant_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessJoinRetrospectiveResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: JoinRetrospectiveResponse,
}

/// Public view of a participant. Deliberately omits session_id and user_id:
/// the session id is the credential that binds a device to its anonymous
/// identity.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantItem {
    pub participant_id: i64,
    pub retrospective_id: i64,
    pub anonymous_name: String,
    pub is_moderator: bool,
}

impl From<participant::Model> for ParticipantItem {
    fn from(model: participant::Model) -> Self {
        Self {
            participant_id: model.participant_id,
            retrospective_id: model.retrospective_id,
            anonymous_name: model.anonymous_name,
            is_moderator: model.is_moderator,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessParticipantListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ParticipantItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(range(min = 1, message = "votesPerParticipant must be at least 1."))]
    pub votes_per_participant: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEmptyResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}
