use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::models::UserId;

/// Journey aggregate entity.
///
/// Journeys are created and mutated outside this service; only listing by
/// owner is exposed here. Stops and companions are unstructured collections
/// stored as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: JourneyId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_public: bool,
    pub stops: serde_json::Value,
    pub companions: serde_json::Value,
    pub budget: f64,
}

/// Journey unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JourneyId(pub i64);

impl JourneyId {
    /// Get the raw numeric identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for JourneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
