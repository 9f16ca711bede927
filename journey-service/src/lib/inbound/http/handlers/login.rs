use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    // Unknown email and wrong password must stay indistinguishable to the
    // caller, so both collapse into the same 401 body.
    let user = state
        .user_service
        .get_user_by_email(&body.email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            other => {
                tracing::error!(error = %other, "User lookup failed during login");
                ApiError::InternalServerError("internal server error".to_string())
            }
        })?;

    let claims = auth::Claims::for_user(user.id.as_i64(), state.token_expiration_hours);

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            other => {
                tracing::error!(error = %other, user_id = %user.id, "Token generation failed during login");
                ApiError::InternalServerError("internal server error".to_string())
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            user: (&user).into(),
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
