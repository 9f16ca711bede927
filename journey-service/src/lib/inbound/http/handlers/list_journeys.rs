use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::journey::models::Journey;

pub async fn list_journeys(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<JourneyData>>, ApiError> {
    let journeys = state
        .journey_service
        .list_journeys(&current_user.user_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        journeys.iter().map(JourneyData::from).collect(),
    ))
}

/// Wire projection of a journey. Dates render as ISO-8601 (RFC 3339).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_public: bool,
    pub stops: serde_json::Value,
    pub companions: serde_json::Value,
    pub budget: f64,
}

impl From<&Journey> for JourneyData {
    fn from(journey: &Journey) -> Self {
        Self {
            id: journey.id.as_i64(),
            name: journey.name.clone(),
            description: journey.description.clone(),
            start_date: journey.start_date,
            end_date: journey.end_date,
            is_public: journey.is_public,
            stops: journey.stops.clone(),
            companions: journey.companions.clone(),
            budget: journey.budget,
        }
    }
}
