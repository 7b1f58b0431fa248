use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_token, Claims};

/// Extractor for an authenticated caller. Rejects the request when no valid
/// bearer token is present.
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Extracts the numeric user id from the JWT subject claim.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid user id in token.".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::Unauthorized("Login is required.".to_string()))?;

        let claims = decode_token(&token, &state.config.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}

/// Extractor for reads that are auth-scoped but not auth-required
/// (an unauthenticated caller gets an empty result, not an error).
/// A present-but-invalid token is still rejected.
pub struct OptionalAuthUser(pub Option<Claims>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Result<Option<i64>, AppError> {
        match &self.0 {
            Some(claims) => claims
                .sub
                .parse()
                .map(Some)
                .map_err(|_| AppError::Unauthorized("Invalid user id in token.".to_string())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts)? {
            Some(token) => {
                let claims = decode_token(&token, &state.config.jwt_secret)?;
                Ok(OptionalAuthUser(Some(claims)))
            }
            None => Ok(OptionalAuthUser(None)),
        }
    }
}

/// Pulls the bearer token out of the Authorization header, if any.
fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(auth_header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_header_str = auth_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Malformed Authorization header.".to_string()))?;

    let token = auth_header_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid token format.".to_string()))?;

    Ok(Some(token.to_string()))
}
