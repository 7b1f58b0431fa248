use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::naming;
use crate::utils::policy;

use super::dto::{
    CreateRetrospectiveRequest, CreateRetrospectiveResponse, JoinRetrospectiveRequest,
    JoinRetrospectiveResponse, ParticipantItem, RetrospectiveItem, UpdateSettingsRequest,
};
use super::entity::{participant, retrospective};

/// Attempts to allocate a collision-free invite code before giving up.
const MAX_INVITE_CODE_ATTEMPTS: usize = 5;

pub struct RetrospectiveService;

impl RetrospectiveService {
    /// Creates a retrospective together with its moderator participant.
    ///
    /// Both rows are inserted in one transaction so a retrospective never
    /// exists without its moderator identity.
    pub async fn create(
        state: AppState,
        user_id: i64,
        req: CreateRetrospectiveRequest,
    ) -> Result<CreateRetrospectiveResponse, AppError> {
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 1. Allocate a unique invite code
        let invite_code = Self::unique_invite_code(&txn).await?;

        // 2. Insert the retrospective
        let now = Utc::now().naive_utc();
        let retrospective_model = retrospective::ActiveModel {
            name: Set(req.name.clone()),
            moderator_id: Set(user_id),
            votes_per_participant: Set(req.votes_per_participant),
            is_active: Set(true),
            invite_code: Set(invite_code.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = retrospective_model
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let retrospective_id = inserted.retrospective_id;

        // 3. Insert the moderator's own participant row
        let participant_model = participant::ActiveModel {
            retrospective_id: Set(retrospective_id),
            anonymous_name: Set(naming::generate_anonymous_name()),
            session_id: Set(format!("moderator-{}", user_id)),
            is_moderator: Set(true),
            user_id: Set(Some(user_id)),
            created_at: Set(now),
            ..Default::default()
        };

        participant_model
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            retrospective_id = retrospective_id,
            moderator_id = user_id,
            votes_per_participant = req.votes_per_participant,
            "Retrospective created"
        );

        Ok(CreateRetrospectiveResponse {
            retrospective_id,
            invite_code,
        })
    }

    /// Generates invite codes until one is unused, bounded by
    /// MAX_INVITE_CODE_ATTEMPTS.
    async fn unique_invite_code(txn: &DatabaseTransaction) -> Result<String, AppError> {
        for _ in 0..MAX_INVITE_CODE_ATTEMPTS {
            let code = naming::generate_invite_code();
            let taken = retrospective::Entity::find()
                .filter(retrospective::Column::InviteCode.eq(&code))
                .one(txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            if taken.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::InternalError(
            "Failed to allocate a unique invite code.".to_string(),
        ))
    }

    /// Resolves a retrospective by invite code.
    ///
    /// Inactive (ended) retrospectives are indistinguishable from missing
    /// ones here, so stale invite links do not leak ended sessions.
    pub async fn get_by_invite_code(
        state: AppState,
        invite_code: &str,
    ) -> Result<Option<RetrospectiveItem>, AppError> {
        let retrospective_model = retrospective::Entity::find()
            .filter(retrospective::Column::InviteCode.eq(invite_code))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(retrospective_model
            .filter(|r| r.is_active)
            .map(RetrospectiveItem::from))
    }

    pub async fn get_by_id(
        state: AppState,
        retrospective_id: i64,
    ) -> Result<Option<RetrospectiveItem>, AppError> {
        let retrospective_model = retrospective::Entity::find_by_id(retrospective_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(retrospective_model.map(RetrospectiveItem::from))
    }

    /// Retrospectives moderated by the caller, newest first. An
    /// unauthenticated caller gets an empty list, not an error.
    pub async fn get_my_retrospectives(
        state: AppState,
        user_id: Option<i64>,
    ) -> Result<Vec<RetrospectiveItem>, AppError> {
        let Some(user_id) = user_id else {
            return Ok(vec![]);
        };

        let retrospectives = retrospective::Entity::find()
            .filter(retrospective::Column::ModeratorId.eq(user_id))
            .order_by_desc(retrospective::Column::CreatedAt)
            .order_by_desc(retrospective::Column::RetrospectiveId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(retrospectives
            .into_iter()
            .map(RetrospectiveItem::from)
            .collect())
    }

    /// Joins a retrospective by invite code, creating a participant for the
    /// caller's session.
    ///
    /// Idempotent: a second join with the same (sessionId, retrospective)
    /// returns the existing participant id and creates no duplicate row.
    pub async fn join_as_participant(
        state: AppState,
        req: JoinRetrospectiveRequest,
    ) -> Result<JoinRetrospectiveResponse, AppError> {
        // 1. Resolve the invite code; ended sessions are not joinable
        let retrospective_model = retrospective::Entity::find()
            .filter(retrospective::Column::InviteCode.eq(&req.invite_code))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .filter(|r| r.is_active)
            .ok_or_else(|| {
                AppError::NotFound("Retrospective not found or inactive.".to_string())
            })?;

        let retrospective_id = retrospective_model.retrospective_id;

        // 2. Reuse the participant bound to this session, if any
        let existing = Self::find_session_participant(&state, &req.session_id, retrospective_id)
            .await?;

        if let Some(existing) = existing {
            return Ok(JoinRetrospectiveResponse {
                participant_id: existing.participant_id,
            });
        }

        // 3. Create a fresh anonymous participant
        let participant_model = participant::ActiveModel {
            retrospective_id: Set(retrospective_id),
            anonymous_name: Set(naming::generate_anonymous_name()),
            session_id: Set(req.session_id.clone()),
            is_moderator: Set(false),
            user_id: Set(None),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match participant_model.insert(&state.db).await {
            Ok(inserted) => {
                info!(
                    retrospective_id = retrospective_id,
                    participant_id = inserted.participant_id,
                    "Participant joined"
                );
                Ok(JoinRetrospectiveResponse {
                    participant_id: inserted.participant_id,
                })
            }
            Err(e) => {
                // Two concurrent joins from the same session race on the
                // (session_id, retrospective_id) unique index; the loser
                // re-reads and returns the winner's row.
                let error_msg = e.to_string().to_lowercase();
                if error_msg.contains("duplicate")
                    || error_msg.contains("unique")
                    || error_msg.contains("constraint")
                {
                    let existing = Self::find_session_participant(
                        &state,
                        &req.session_id,
                        retrospective_id,
                    )
                    .await?
                    .ok_or_else(|| AppError::InternalError(e.to_string()))?;

                    Ok(JoinRetrospectiveResponse {
                        participant_id: existing.participant_id,
                    })
                } else {
                    Err(AppError::InternalError(e.to_string()))
                }
            }
        }
    }

    async fn find_session_participant(
        state: &AppState,
        session_id: &str,
        retrospective_id: i64,
    ) -> Result<Option<participant::Model>, AppError> {
        participant::Entity::find()
            .filter(participant::Column::SessionId.eq(session_id))
            .filter(participant::Column::RetrospectiveId.eq(retrospective_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Participants of a retrospective, in join order.
    pub async fn get_participants(
        state: AppState,
        retrospective_id: i64,
    ) -> Result<Vec<ParticipantItem>, AppError> {
        let participants = participant::Entity::find()
            .filter(participant::Column::RetrospectiveId.eq(retrospective_id))
            .order_by_asc(participant::Column::ParticipantId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(participants.into_iter().map(ParticipantItem::from).collect())
    }

    /// Changes the vote budget. Moderator only.
    pub async fn update_settings(
        state: AppState,
        user_id: i64,
        retrospective_id: i64,
        req: UpdateSettingsRequest,
    ) -> Result<(), AppError> {
        let retrospective_model = Self::find_required(&state, retrospective_id).await?;

        policy::require_moderator(&retrospective_model, user_id)?;

        let mut active: retrospective::ActiveModel = retrospective_model.into();
        active.votes_per_participant = Set(req.votes_per_participant);
        active.updated_at = Set(Utc::now().naive_utc());
        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            retrospective_id = retrospective_id,
            votes_per_participant = req.votes_per_participant,
            "Retrospective settings updated"
        );

        Ok(())
    }

    /// Deactivates a retrospective permanently. Moderator only; cards and
    /// votes are left in place.
    pub async fn end_retrospective(
        state: AppState,
        user_id: i64,
        retrospective_id: i64,
    ) -> Result<(), AppError> {
        let retrospective_model = Self::find_required(&state, retrospective_id).await?;

        policy::require_moderator(&retrospective_model, user_id)?;

        let mut active: retrospective::ActiveModel = retrospective_model.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now().naive_utc());
        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(retrospective_id = retrospective_id, "Retrospective ended");

        Ok(())
    }

    async fn find_required(
        state: &AppState,
        retrospective_id: i64,
    ) -> Result<retrospective::Model, AppError> {
        retrospective::Entity::find_by_id(retrospective_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::NotFound("Retrospective not found.".to_string()))
    }
}
