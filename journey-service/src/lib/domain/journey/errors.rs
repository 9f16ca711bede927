use thiserror::Error;

/// Error for journey-related operations
#[derive(Debug, Clone, Error)]
pub enum JourneyError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
