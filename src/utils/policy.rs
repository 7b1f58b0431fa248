//! Authorization policy checks.
//!
//! Every mutation that needs an ownership or membership rule goes through one
//! of these helpers, so the rules live in one place instead of being repeated
//! as ad hoc equality checks in each service method.

use crate::domain::card::entity::card;
use crate::domain::retrospective::entity::{participant, retrospective};
use crate::utils::error::AppError;

/// Caller must be the retrospective's moderator (settings, ending).
pub fn require_moderator(
    retrospective: &retrospective::Model,
    user_id: i64,
) -> Result<(), AppError> {
    if retrospective.moderator_id != user_id {
        return Err(AppError::Forbidden(
            "Only the moderator may perform this action.".to_string(),
        ));
    }
    Ok(())
}

/// Caller must be the card's author (edit, delete).
pub fn require_author(card: &card::Model, participant_id: i64) -> Result<(), AppError> {
    if card.participant_id != participant_id {
        return Err(AppError::Forbidden(
            "Only the card's author may perform this action.".to_string(),
        ));
    }
    Ok(())
}

/// Participant must belong to the stated retrospective (posting, voting).
pub fn require_membership(
    participant: &participant::Model,
    retrospective_id: i64,
) -> Result<(), AppError> {
    if participant.retrospective_id != retrospective_id {
        return Err(AppError::InvalidReference("Invalid participant".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn retrospective_fixture(moderator_id: i64) -> retrospective::Model {
        retrospective::Model {
            retrospective_id: 1,
            name: "Sprint 1".to_string(),
            moderator_id,
            votes_per_participant: 3,
            is_active: true,
            invite_code: "AB12CD".to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    fn participant_fixture(retrospective_id: i64) -> participant::Model {
        participant::Model {
            participant_id: 7,
            retrospective_id,
            anonymous_name: "Curious Fox".to_string(),
            session_id: "s1".to_string(),
            is_moderator: false,
            user_id: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn card_fixture(participant_id: i64) -> card::Model {
        card::Model {
            card_id: 3,
            retrospective_id: 1,
            participant_id,
            category: card::CardCategory::Ideas,
            content: "Ship faster".to_string(),
            vote_count: 0,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn should_allow_moderator() {
        let retro = retrospective_fixture(10);
        assert!(require_moderator(&retro, 10).is_ok());
    }

    #[test]
    fn should_reject_non_moderator() {
        let retro = retrospective_fixture(10);
        let result = require_moderator(&retro, 11);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn should_allow_author() {
        let card = card_fixture(7);
        assert!(require_author(&card, 7).is_ok());
    }

    #[test]
    fn should_reject_non_author() {
        let card = card_fixture(7);
        let result = require_author(&card, 8);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn should_reject_participant_from_other_retrospective() {
        let participant = participant_fixture(2);
        let result = require_membership(&participant, 1);
        assert!(matches!(result, Err(AppError::InvalidReference(_))));
    }

    #[test]
    fn should_allow_member_participant() {
        let participant = participant_fixture(1);
        assert!(require_membership(&participant, 1).is_ok());
    }
}
