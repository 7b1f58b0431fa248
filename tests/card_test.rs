//! Card management tests: membership check on create, author-only edit and
//! delete, cascade vote deletion, read-time author name resolution.

mod common;

use retroboard::domain::card::dto::{CreateCardRequest, UpdateCardRequest};
use retroboard::domain::card::entity::card::CardCategory;
use retroboard::domain::card::service::CardService;
use retroboard::domain::vote::dto::ToggleVoteRequest;
use retroboard::domain::vote::service::VoteService;
use retroboard::utils::error::AppError;

#[tokio::test]
async fn should_create_card_with_zero_votes() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let participant_id = common::join(&state, &created.invite_code, "s1").await;

    // Act
    let card_id = common::post_card(
        &state,
        created.retrospective_id,
        participant_id,
        CardCategory::WentWell,
        "Great pairing sessions",
    )
    .await;

    // Assert
    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].card_id, card_id);
    assert_eq!(cards[0].vote_count, 0);
    assert_eq!(cards[0].category, CardCategory::WentWell);
    assert_eq!(cards[0].content, "Great pairing sessions");
}

#[tokio::test]
async fn should_reject_card_from_participant_of_other_retrospective() {
    // Arrange: two separate boards
    let state = common::setup_state().await;
    let board_a = common::seed_retrospective(&state, 1, "Sprint A", 3).await;
    let board_b = common::seed_retrospective(&state, 2, "Sprint B", 3).await;
    let participant_b = common::join(&state, &board_b.invite_code, "s1").await;

    // Act: participant of B posting to A
    let result = CardService::create(
        state.clone(),
        CreateCardRequest {
            retrospective_id: board_a.retrospective_id,
            participant_id: participant_b,
            category: CardCategory::Ideas,
            content: "Wrong board".to_string(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::InvalidReference(_))));

    let cards = CardService::get_by_retrospective(state.clone(), board_a.retrospective_id)
        .await
        .unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn should_reject_card_from_unknown_participant() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;

    // Act
    let result = CardService::create(
        state.clone(),
        CreateCardRequest {
            retrospective_id: created.retrospective_id,
            participant_id: 999_999,
            category: CardCategory::Ideas,
            content: "Ghost".to_string(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::InvalidReference(_))));
}

#[tokio::test]
async fn should_update_own_card_content() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let participant_id = common::join(&state, &created.invite_code, "s1").await;
    let card_id = common::post_card(
        &state,
        created.retrospective_id,
        participant_id,
        CardCategory::Ideas,
        "Draft",
    )
    .await;

    // Act
    CardService::update(
        state.clone(),
        card_id,
        UpdateCardRequest {
            participant_id,
            content: "Polished".to_string(),
        },
    )
    .await
    .unwrap();

    // Assert: content changed, category and author untouched
    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();
    assert_eq!(cards[0].content, "Polished");
    assert_eq!(cards[0].category, CardCategory::Ideas);
    assert_eq!(cards[0].participant_id, participant_id);
}

#[tokio::test]
async fn should_reject_edit_from_non_author() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let author = common::join(&state, &created.invite_code, "s1").await;
    let other = common::join(&state, &created.invite_code, "s2").await;
    let card_id = common::post_card(
        &state,
        created.retrospective_id,
        author,
        CardCategory::WentPoorly,
        "Flaky CI",
    )
    .await;

    // Act
    let result = CardService::update(
        state.clone(),
        card_id,
        UpdateCardRequest {
            participant_id: other,
            content: "Hijacked".to_string(),
        },
    )
    .await;

    // Assert: authorization error, content unchanged
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();
    assert_eq!(cards[0].content, "Flaky CI");
}

#[tokio::test]
async fn should_reject_update_of_missing_card() {
    // Arrange
    let state = common::setup_state().await;

    // Act
    let result = CardService::update(
        state.clone(),
        999_999,
        UpdateCardRequest {
            participant_id: 1,
            content: "Nothing here".to_string(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_delete_card_and_cascade_votes() {
    // Arrange: a card with votes from two participants
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let author = common::join(&state, &created.invite_code, "s1").await;
    let voter = common::join(&state, &created.invite_code, "s2").await;
    let card_id = common::post_card(
        &state,
        created.retrospective_id,
        author,
        CardCategory::Ideas,
        "Ship faster",
    )
    .await;

    for participant_id in [author, voter] {
        VoteService::toggle(
            state.clone(),
            ToggleVoteRequest {
                card_id,
                participant_id,
            },
        )
        .await
        .unwrap();
    }

    // Act
    CardService::remove(state.clone(), card_id, author).await.unwrap();

    // Assert: card gone, and no vote survives for either participant
    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();
    assert!(cards.is_empty());

    for participant_id in [author, voter] {
        let votes = VoteService::get_participant_votes(
            state.clone(),
            participant_id,
            created.retrospective_id,
        )
        .await
        .unwrap();
        assert!(votes.is_empty());
    }
}

#[tokio::test]
async fn should_reject_delete_from_non_author() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let author = common::join(&state, &created.invite_code, "s1").await;
    let other = common::join(&state, &created.invite_code, "s2").await;
    let card_id = common::post_card(
        &state,
        created.retrospective_id,
        author,
        CardCategory::Ideas,
        "Keep me",
    )
    .await;

    // Act
    let result = CardService::remove(state.clone(), card_id, other).await;

    // Assert
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();
    assert_eq!(cards.len(), 1);
}

#[tokio::test]
async fn should_resolve_author_names_on_read() {
    // Arrange: cards from two different participants
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let first = common::join(&state, &created.invite_code, "s1").await;
    let second = common::join(&state, &created.invite_code, "s2").await;
    common::post_card(
        &state,
        created.retrospective_id,
        first,
        CardCategory::WentWell,
        "Demo went smoothly",
    )
    .await;
    common::post_card(
        &state,
        created.retrospective_id,
        second,
        CardCategory::Ideas,
        "Automate releases",
    )
    .await;

    let participants = retroboard::domain::retrospective::service::RetrospectiveService::get_participants(
        state.clone(),
        created.retrospective_id,
    )
    .await
    .unwrap();

    // Act
    let cards = CardService::get_by_retrospective(state.clone(), created.retrospective_id)
        .await
        .unwrap();

    // Assert: each card carries its author's current anonymous name
    assert_eq!(cards.len(), 2);
    for card in &cards {
        let author = participants
            .iter()
            .find(|p| p.participant_id == card.participant_id)
            .expect("author should be a participant");
        assert_eq!(card.participant_name, author.anonymous_name);
    }
}
