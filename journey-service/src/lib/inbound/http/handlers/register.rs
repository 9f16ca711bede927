use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .register_user(command)
        .await
        .map_err(|e| match e {
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("email already registered".to_string())
            }
            other => {
                tracing::error!(error = %other, "User registration failed");
                ApiError::BadRequest("registration failed".to_string())
            }
        })?;

    // The fresh account gets a session immediately
    let claims = auth::Claims::for_user(user.id.as_i64(), state.token_expiration_hours);
    let token = state.authenticator.generate_token(&claims).map_err(|e| {
        tracing::error!(error = %e, user_id = %user.id, "Token generation failed");
        ApiError::BadRequest("registration failed".to_string())
    })?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SessionResponseData {
            user: (&user).into(),
            token,
        },
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let email =
            EmailAddress::new(self.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(RegisterUserCommand::new(self.name, email, self.password))
    }
}
