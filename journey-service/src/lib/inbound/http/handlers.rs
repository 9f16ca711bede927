use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::journey::errors::JourneyError;
use crate::user::models::User;

pub mod list_journeys;
pub mod login;
pub mod register;

/// Success response: a status code plus the body serialized as-is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure responses, rendered with the wire bodies the API promises:
/// authentication failures carry `message`, everything else carries `error`.
///
/// Raw database or library error text never reaches a response body; the
/// handlers log it server-side and pass a generic message here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": msg }))).into_response()
            }
            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}

impl From<JourneyError> for ApiError {
    fn from(err: JourneyError) -> Self {
        match err {
            JourneyError::DatabaseError(msg) => {
                tracing::error!(error = %msg, "Journey storage failure");
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// Public projection of a user, shared by the register and login responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_guest: bool,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            is_guest: user.is_guest,
        }
    }
}

/// Response body for endpoints that establish a session: the user plus a
/// freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub user: UserData,
    pub token: String,
}
