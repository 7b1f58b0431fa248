pub mod config;
pub mod domain;
pub mod state;
pub mod utils;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::retrospective::handler::create_retrospective,
        domain::retrospective::handler::get_by_invite_code,
        domain::retrospective::handler::get_by_id,
        domain::retrospective::handler::get_my_retrospectives,
        domain::retrospective::handler::join_as_participant,
        domain::retrospective::handler::get_participants,
        domain::retrospective::handler::update_settings,
        domain::retrospective::handler::end_retrospective,
        domain::card::handler::get_by_retrospective,
        domain::card::handler::create_card,
        domain::card::handler::update_card,
        domain::card::handler::delete_card,
        domain::vote::handler::toggle_vote,
        domain::vote::handler::get_participant_votes,
    ),
    components(
        schemas(
            domain::retrospective::dto::CreateRetrospectiveRequest,
            domain::retrospective::dto::CreateRetrospectiveResponse,
            domain::retrospective::dto::SuccessCreateRetrospectiveResponse,
            domain::retrospective::dto::RetrospectiveItem,
            domain::retrospective::dto::SuccessRetrospectiveResponse,
            domain::retrospective::dto::SuccessRetrospectiveListResponse,
            domain::retrospective::dto::JoinRetrospectiveRequest,
            domain::retrospective::dto::JoinRetrospectiveResponse,
            domain::retrospective::dto::SuccessJoinRetrospectiveResponse,
            domain::retrospective::dto::ParticipantItem,
            domain::retrospective::dto::SuccessParticipantListResponse,
            domain::retrospective::dto::UpdateSettingsRequest,
            domain::retrospective::dto::SuccessEmptyResponse,
            domain::card::entity::card::CardCategory,
            domain::card::dto::CreateCardRequest,
            domain::card::dto::CreateCardResponse,
            domain::card::dto::SuccessCreateCardResponse,
            domain::card::dto::UpdateCardRequest,
            domain::card::dto::DeleteCardRequest,
            domain::card::dto::CardItem,
            domain::card::dto::SuccessCardListResponse,
            domain::vote::dto::ToggleVoteRequest,
            domain::vote::dto::VoteAction,
            domain::vote::dto::ToggleVoteResponse,
            domain::vote::dto::SuccessToggleVoteResponse,
            domain::vote::dto::VoteItem,
            domain::vote::dto::SuccessVoteListResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Retrospective", description = "Retrospective lifecycle and participants"),
        (name = "Card", description = "Feedback cards"),
        (name = "Vote", description = "Budget-limited voting")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/v1/retrospectives",
            post(domain::retrospective::handler::create_retrospective)
                .get(domain::retrospective::handler::get_my_retrospectives),
        )
        .route(
            "/api/v1/retrospectives/join",
            post(domain::retrospective::handler::join_as_participant),
        )
        .route(
            "/api/v1/retrospectives/invite/:invite_code",
            get(domain::retrospective::handler::get_by_invite_code),
        )
        .route(
            "/api/v1/retrospectives/:retrospective_id",
            get(domain::retrospective::handler::get_by_id),
        )
        .route(
            "/api/v1/retrospectives/:retrospective_id/participants",
            get(domain::retrospective::handler::get_participants),
        )
        .route(
            "/api/v1/retrospectives/:retrospective_id/settings",
            patch(domain::retrospective::handler::update_settings),
        )
        .route(
            "/api/v1/retrospectives/:retrospective_id/end",
            post(domain::retrospective::handler::end_retrospective),
        )
        .route(
            "/api/v1/retrospectives/:retrospective_id/cards",
            get(domain::card::handler::get_by_retrospective),
        )
        .route("/api/v1/cards", post(domain::card::handler::create_card))
        .route(
            "/api/v1/cards/:card_id",
            patch(domain::card::handler::update_card).delete(domain::card::handler::delete_card),
        )
        .route("/api/v1/votes", get(domain::vote::handler::get_participant_votes))
        .route(
            "/api/v1/votes/toggle",
            post(domain::vote::handler::toggle_vote),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
