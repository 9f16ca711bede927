use std::sync::Arc;

use async_trait::async_trait;

use crate::journey::errors::JourneyError;
use crate::journey::models::Journey;
use crate::journey::ports::JourneyRepository;
use crate::journey::ports::JourneyServicePort;
use crate::user::models::UserId;

/// Domain service implementation for journey operations.
pub struct JourneyService<JR>
where
    JR: JourneyRepository,
{
    repository: Arc<JR>,
}

impl<JR> JourneyService<JR>
where
    JR: JourneyRepository,
{
    /// Create a new journey service with an injected repository.
    pub fn new(repository: Arc<JR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<JR> JourneyServicePort for JourneyService<JR>
where
    JR: JourneyRepository,
{
    async fn list_journeys(&self, user_id: &UserId) -> Result<Vec<Journey>, JourneyError> {
        self.repository.list_for_user(user_id).await
    }
}
