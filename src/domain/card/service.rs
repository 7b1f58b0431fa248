use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, warn};

use crate::domain::retrospective::entity::participant;
use crate::domain::vote::entity::vote;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::policy;

use super::dto::{CardItem, CreateCardRequest, CreateCardResponse, UpdateCardRequest};
use super::entity::card;

pub struct CardService;

impl CardService {
    /// Cards of a retrospective with the author's current anonymous name
    /// resolved per card. The name is denormalized at read time, never
    /// stored; a broken author reference falls back to "Unknown".
    pub async fn get_by_retrospective(
        state: AppState,
        retrospective_id: i64,
    ) -> Result<Vec<CardItem>, AppError> {
        // 1. Cards in creation order
        let cards = card::Entity::find()
            .filter(card::Column::RetrospectiveId.eq(retrospective_id))
            .order_by_asc(card::Column::CardId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if cards.is_empty() {
            return Ok(vec![]);
        }

        // 2. Batch-resolve author names
        let participant_ids: Vec<i64> = cards.iter().map(|c| c.participant_id).collect();

        let participants = participant::Entity::find()
            .filter(participant::Column::ParticipantId.is_in(participant_ids))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let name_map: HashMap<i64, String> = participants
            .into_iter()
            .map(|p| (p.participant_id, p.anonymous_name))
            .collect();

        // 3. Assemble board items
        let items = cards
            .into_iter()
            .map(|c| {
                let name = match name_map.get(&c.participant_id) {
                    Some(name) => name.clone(),
                    None => {
                        warn!(
                            card_id = c.card_id,
                            participant_id = c.participant_id,
                            "Card references a missing participant"
                        );
                        "Unknown".to_string()
                    }
                };
                CardItem::from_model(c, name)
            })
            .collect();

        Ok(items)
    }

    /// Posts a card. The author must be a participant of the stated
    /// retrospective; content is stored as given (caller contract).
    pub async fn create(
        state: AppState,
        req: CreateCardRequest,
    ) -> Result<CreateCardResponse, AppError> {
        // 1. Cross-reference check: author belongs to the retrospective
        let participant_model = participant::Entity::find_by_id(req.participant_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::InvalidReference("Invalid participant".to_string()))?;

        policy::require_membership(&participant_model, req.retrospective_id)?;

        // 2. Insert with an empty vote tally
        let now = Utc::now().naive_utc();
        let card_model = card::ActiveModel {
            retrospective_id: Set(req.retrospective_id),
            participant_id: Set(req.participant_id),
            category: Set(req.category),
            content: Set(req.content),
            vote_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = card_model
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            card_id = inserted.card_id,
            retrospective_id = req.retrospective_id,
            participant_id = req.participant_id,
            "Card created"
        );

        Ok(CreateCardResponse {
            card_id: inserted.card_id,
        })
    }

    /// Edits a card's content. Author only; category and author are
    /// immutable after creation.
    pub async fn update(
        state: AppState,
        card_id: i64,
        req: UpdateCardRequest,
    ) -> Result<(), AppError> {
        let card_model = Self::find_required(&state, card_id).await?;

        policy::require_author(&card_model, req.participant_id)?;

        let mut active: card::ActiveModel = card_model.into();
        active.content = Set(req.content);
        active.updated_at = Set(Utc::now().naive_utc());
        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(())
    }

    /// Deletes a card and every vote referencing it, in one transaction, so
    /// no orphaned vote rows are ever observable.
    pub async fn remove(
        state: AppState,
        card_id: i64,
        participant_id: i64,
    ) -> Result<(), AppError> {
        let card_model = Self::find_required(&state, card_id).await?;

        policy::require_author(&card_model, participant_id)?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let votes_deleted = vote::Entity::delete_many()
            .filter(vote::Column::CardId.eq(card_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        card_model
            .delete(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            card_id = card_id,
            votes_deleted = votes_deleted.rows_affected,
            "Card deleted with its votes"
        );

        Ok(())
    }

    async fn find_required(state: &AppState, card_id: i64) -> Result<card::Model, AppError> {
        card::Entity::find_by_id(card_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::NotFound("Card not found.".to_string()))
    }
}
