use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use crate::domain::card::entity::card;
use crate::domain::retrospective::entity::{participant, retrospective};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::policy;

use super::dto::{ToggleVoteRequest, ToggleVoteResponse, VoteAction, VoteItem};
use super::entity::vote;

pub struct VoteService;

impl VoteService {
    /// Toggles a participant's vote on a card.
    ///
    /// The whole read-check-write sequence runs inside one transaction so
    /// the card's vote_count and the vote rows can never diverge, and the
    /// (card_id, participant_id) unique index rejects a same-participant
    /// double-add race at the storage layer.
    pub async fn toggle(
        state: AppState,
        req: ToggleVoteRequest,
    ) -> Result<ToggleVoteResponse, AppError> {
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 1. Resolve the card
        let card_model = card::Entity::find_by_id(req.card_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::NotFound("Card not found.".to_string()))?;

        // 2. Resolve the participant and check it belongs to the card's
        //    retrospective
        let participant_model = participant::Entity::find_by_id(req.participant_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::InvalidReference("Invalid participant".to_string()))?;

        policy::require_membership(&participant_model, card_model.retrospective_id)?;

        // 3. Resolve the retrospective for its vote budget
        let retrospective_model =
            retrospective::Entity::find_by_id(card_model.retrospective_id)
                .one(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("Retrospective not found.".to_string()))?;

        // 4. Look for an existing vote on this card by this participant
        let existing_vote = vote::Entity::find()
            .filter(vote::Column::CardId.eq(req.card_id))
            .filter(vote::Column::ParticipantId.eq(req.participant_id))
            .one(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let response = if let Some(existing_vote) = existing_vote {
            // 5. Toggle off: remove the vote and decrement the tally
            existing_vote
                .delete(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let vote_count = card_model.vote_count - 1;
            let mut active: card::ActiveModel = card_model.into();
            active.vote_count = Set(vote_count);
            active
                .update(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            ToggleVoteResponse {
                action: VoteAction::Removed,
                vote_count,
            }
        } else {
            // 6. Toggle on: enforce the budget across the whole
            //    retrospective, then insert and increment
            let spent = vote::Entity::find()
                .filter(vote::Column::ParticipantId.eq(req.participant_id))
                .filter(vote::Column::RetrospectiveId.eq(card_model.retrospective_id))
                .count(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            if spent >= retrospective_model.votes_per_participant as u64 {
                return Err(AppError::VoteLimitReached(
                    "Vote limit reached".to_string(),
                ));
            }

            let vote_model = vote::ActiveModel {
                card_id: Set(req.card_id),
                participant_id: Set(req.participant_id),
                retrospective_id: Set(card_model.retrospective_id),
                created_at: Set(Utc::now().naive_utc()),
                ..Default::default()
            };

            vote_model
                .insert(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let vote_count = card_model.vote_count + 1;
            let mut active: card::ActiveModel = card_model.into();
            active.vote_count = Set(vote_count);
            active
                .update(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            ToggleVoteResponse {
                action: VoteAction::Added,
                vote_count,
            }
        };

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            card_id = req.card_id,
            participant_id = req.participant_id,
            action = ?response.action,
            vote_count = response.vote_count,
            "Vote toggled"
        );

        Ok(response)
    }

    /// Votes cast by one participant within one retrospective. Used by
    /// clients to compute the remaining budget and highlight voted cards.
    pub async fn get_participant_votes(
        state: AppState,
        participant_id: i64,
        retrospective_id: i64,
    ) -> Result<Vec<VoteItem>, AppError> {
        let votes = vote::Entity::find()
            .filter(vote::Column::ParticipantId.eq(participant_id))
            .filter(vote::Column::RetrospectiveId.eq(retrospective_id))
            .order_by_asc(vote::Column::VoteId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(votes.into_iter().map(VoteItem::from).collect())
    }
}
