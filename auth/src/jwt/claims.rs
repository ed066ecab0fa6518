use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every token this service issues.
///
/// The shape is fixed: the subject is the login the token was minted for,
/// plus issued-at and expiry timestamps. Tokens never carry roles or other
/// custom claims, and are never mutated after issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the login this token asserts
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a login with an expiry window in days.
    pub fn for_login(login: impl Into<String>, expiration_days: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(expiration_days);

        Self {
            sub: login.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
