//! End-to-end HTTP tests driving the router directly, covering the response
//! envelope, bearer authentication, and error status codes.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use retroboard::app;
use retroboard::utils::jwt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn bearer_token(user_id: &str) -> String {
    jwt::encode_token(user_id.to_string(), common::TEST_JWT_SECRET, 3600)
        .expect("failed to issue test token")
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn should_require_bearer_token_to_create_retrospective() {
    // Arrange
    let state = common::setup_state().await;
    let app = app(state);

    // Act
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/retrospectives",
        None,
        Some(json!({ "name": "Sprint 1", "votesPerParticipant": 3 })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["code"], json!("AUTH4001"));
}

#[tokio::test]
async fn should_run_full_board_flow_over_http() {
    // Arrange
    let state = common::setup_state().await;
    let app = app(state);
    let token = bearer_token("1");

    // Act: create a board
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/retrospectives",
        Some(&token),
        Some(json!({ "name": "Sprint 1", "votesPerParticipant": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSuccess"], json!(true));
    let invite_code = body["result"]["inviteCode"].as_str().unwrap().to_string();
    let retrospective_id = body["result"]["retrospectiveId"].as_i64().unwrap();

    // join anonymously
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/retrospectives/join",
        None,
        Some(json!({ "inviteCode": invite_code, "sessionId": "s1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let participant_id = body["result"]["participantId"].as_i64().unwrap();

    // post a card
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/cards",
        None,
        Some(json!({
            "retrospectiveId": retrospective_id,
            "participantId": participant_id,
            "category": "ideas",
            "content": "Ship faster"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let card_id = body["result"]["cardId"].as_i64().unwrap();

    // vote for it
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/votes/toggle",
        None,
        Some(json!({ "cardId": card_id, "participantId": participant_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["action"], json!("added"));
    assert_eq!(body["result"]["voteCount"], json!(1));

    // Assert: the board read path reflects everything
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/retrospectives/{}/cards", retrospective_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cards = body["result"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["cardId"], json!(card_id));
    assert_eq!(cards[0]["category"], json!("ideas"));
    assert_eq!(cards[0]["content"], json!("Ship faster"));
    assert_eq!(cards[0]["voteCount"], json!(1));
    assert!(cards[0]["participantName"].as_str().is_some());
}

#[tokio::test]
async fn should_return_null_result_for_unknown_invite_code() {
    // Arrange
    let state = common::setup_state().await;
    let app = app(state);

    // Act
    let (status, body) = send(&app, "GET", "/api/v1/retrospectives/invite/ZZZZZZ", None, None).await;

    // Assert: success envelope with a null payload, not a 404
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSuccess"], json!(true));
    assert_eq!(body["result"], Value::Null);
}

#[tokio::test]
async fn should_return_conflict_when_vote_budget_is_spent() {
    // Arrange: budget 1, two cards
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 1).await;
    let participant_id = common::join(&state, &created.invite_code, "s1").await;
    let app = app(state.clone());

    let mut card_ids = Vec::new();
    for content in ["Card A", "Card B"] {
        let (_, body) = send(
            &app,
            "POST",
            "/api/v1/cards",
            None,
            Some(json!({
                "retrospectiveId": created.retrospective_id,
                "participantId": participant_id,
                "category": "went-well",
                "content": content
            })),
        )
        .await;
        card_ids.push(body["result"]["cardId"].as_i64().unwrap());
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/votes/toggle",
        None,
        Some(json!({ "cardId": card_ids[0], "participantId": participant_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Act
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/votes/toggle",
        None,
        Some(json!({ "cardId": card_ids[1], "participantId": participant_id })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["code"], json!("VOTE4091"));
}

#[tokio::test]
async fn should_reject_invalid_create_payload() {
    // Arrange
    let state = common::setup_state().await;
    let app = app(state);
    let token = bearer_token("1");

    // Act: zero budget fails validation
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/retrospectives",
        Some(&token),
        Some(json!({ "name": "Sprint 1", "votesPerParticipant": 0 })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["code"], json!("COMMON400"));
}

#[tokio::test]
async fn should_forbid_settings_update_from_non_moderator_over_http() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 3).await;
    let app = app(state);
    let other_token = bearer_token("2");

    // Act
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/v1/retrospectives/{}/settings", created.retrospective_id),
        Some(&other_token),
        Some(json!({ "votesPerParticipant": 5 })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!("COMMON403"));
}

#[tokio::test]
async fn should_list_participant_votes_by_query() {
    // Arrange
    let state = common::setup_state().await;
    let created = common::seed_retrospective(&state, 1, "Sprint 1", 2).await;
    let participant_id = common::join(&state, &created.invite_code, "s1").await;
    let app = app(state.clone());

    let (_, body) = send(
        &app,
        "POST",
        "/api/v1/cards",
        None,
        Some(json!({
            "retrospectiveId": created.retrospective_id,
            "participantId": participant_id,
            "category": "went-poorly",
            "content": "Too many meetings"
        })),
    )
    .await;
    let card_id = body["result"]["cardId"].as_i64().unwrap();

    send(
        &app,
        "POST",
        "/api/v1/votes/toggle",
        None,
        Some(json!({ "cardId": card_id, "participantId": participant_id })),
    )
    .await;

    // Act
    let (status, body) = send(
        &app,
        "GET",
        &format!(
            "/api/v1/votes?participantId={}&retrospectiveId={}",
            participant_id, created.retrospective_id
        ),
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let votes = body["result"].as_array().unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0]["cardId"], json!(card_id));
    assert_eq!(votes[0]["participantId"], json!(participant_id));
}

#[tokio::test]
async fn should_serve_health_check() {
    // Arrange
    let state = common::setup_state().await;
    let app = app(state);

    // Act
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}
