//! Shared helpers for the integration test suite.
//!
//! Tests run against an in-memory SQLite database with the schema synced
//! through the same code path production uses.

#![allow(dead_code)]

use retroboard::config::database::create_tables;
use retroboard::config::AppConfig;
use retroboard::domain::card::dto::CreateCardRequest;
use retroboard::domain::card::entity::card::CardCategory;
use retroboard::domain::card::service::CardService;
use retroboard::domain::retrospective::dto::{
    CreateRetrospectiveRequest, CreateRetrospectiveResponse, JoinRetrospectiveRequest,
};
use retroboard::domain::retrospective::service::RetrospectiveService;
use retroboard::state::AppState;
use sea_orm::{ConnectOptions, Database};

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration: 3600,
    }
}

/// Fresh application state over an in-memory database.
///
/// The pool is pinned to a single connection: every pooled connection to
/// `sqlite::memory:` would otherwise open its own empty database.
pub async fn setup_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");

    create_tables(&db).await.expect("failed to sync schema");

    AppState {
        db,
        config: test_config(),
    }
}

/// Creates a retrospective owned by `user_id`.
pub async fn seed_retrospective(
    state: &AppState,
    user_id: i64,
    name: &str,
    votes_per_participant: i32,
) -> CreateRetrospectiveResponse {
    RetrospectiveService::create(
        state.clone(),
        user_id,
        CreateRetrospectiveRequest {
            name: name.to_string(),
            votes_per_participant,
        },
    )
    .await
    .expect("failed to create retrospective")
}

/// Joins a retrospective and returns the participant id.
pub async fn join(state: &AppState, invite_code: &str, session_id: &str) -> i64 {
    RetrospectiveService::join_as_participant(
        state.clone(),
        JoinRetrospectiveRequest {
            invite_code: invite_code.to_string(),
            session_id: session_id.to_string(),
        },
    )
    .await
    .expect("failed to join retrospective")
    .participant_id
}

/// Posts a card and returns its id.
pub async fn post_card(
    state: &AppState,
    retrospective_id: i64,
    participant_id: i64,
    category: CardCategory,
    content: &str,
) -> i64 {
    CardService::create(
        state.clone(),
        CreateCardRequest {
            retrospective_id,
            participant_id,
            category,
            content: content.to_string(),
        },
    )
    .await
    .expect("failed to create card")
    .card_id
}
