use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in a session token.
///
/// Carries the authenticated user's identifier plus issuance and expiry
/// timestamps. Tokens are stateless: nothing here is persisted and there is
/// no revocation before `exp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated user's identifier
    pub user_id: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `expiration_hours` - Hours until token expires
    ///
    /// # Returns
    /// Claims with user_id, exp, and iat set
    pub fn for_user(user_id: i64, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check if the claim set is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
