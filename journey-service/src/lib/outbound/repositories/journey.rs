use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::journey::models::Journey;
use crate::domain::journey::models::JourneyId;
use crate::domain::user::models::UserId;
use crate::journey::errors::JourneyError;
use crate::journey::ports::JourneyRepository;

pub struct PostgresJourneyRepository {
    pool: PgPool,
}

impl PostgresJourneyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct JourneyRow {
    id: i64,
    user_id: i64,
    name: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    is_public: bool,
    stops: serde_json::Value,
    companions: serde_json::Value,
    budget: f64,
}

impl JourneyRow {
    fn into_journey(self) -> Journey {
        Journey {
            id: JourneyId(self.id),
            user_id: UserId(self.user_id),
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_public: self.is_public,
            stops: self.stops,
            companions: self.companions,
            budget: self.budget,
        }
    }
}

#[async_trait]
impl JourneyRepository for PostgresJourneyRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journey>, JourneyError> {
        // No ORDER BY: listing order is whatever the database returns.
        let rows = sqlx::query_as::<_, JourneyRow>(
            r#"
            SELECT id, user_id, name, description, start_date, end_date,
                   is_public, stops, companions, budget
            FROM journeys
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| JourneyError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(JourneyRow::into_journey).collect())
    }
}
