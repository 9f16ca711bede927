use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates bearer tokens and adds user info to request
/// extensions. Rejected requests never reach the wrapped handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate signature and expiry
    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        let message = match e {
            auth::JwtError::TokenExpired => "Token is expired",
            _ => "Token is invalid",
        };
        unauthorized(message)
    })?;

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Token is missing"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Token is missing"))?;

    // Expected shape is `Bearer <token>`: the credential is the second
    // whitespace-separated part. Anything shorter counts as a missing token.
    auth_str
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| unauthorized("Token is missing"))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": message })),
    )
        .into_response()
}
