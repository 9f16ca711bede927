use async_trait::async_trait;

use crate::journey::errors::JourneyError;
use crate::journey::models::Journey;
use crate::user::models::UserId;

/// Port for journey domain service operations.
#[async_trait]
pub trait JourneyServicePort: Send + Sync + 'static {
    /// Retrieve all journeys owned by a user.
    ///
    /// Ordering is whatever the underlying storage returns; callers must not
    /// rely on it.
    ///
    /// # Arguments
    /// * `user_id` - Owning user's id
    ///
    /// # Returns
    /// Vector of journeys (empty if the user has none)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_journeys(&self, user_id: &UserId) -> Result<Vec<Journey>, JourneyError>;
}

/// Persistence operations for journey aggregate.
#[async_trait]
pub trait JourneyRepository: Send + Sync + 'static {
    /// Retrieve all journeys owned by a user.
    ///
    /// # Arguments
    /// * `user_id` - Owning user's id
    ///
    /// # Returns
    /// Vector of journeys (empty if the user has none)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journey>, JourneyError>;
}
