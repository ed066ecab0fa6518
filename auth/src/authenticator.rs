use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT
/// issuance.
///
/// Owns the sign-in flow: check the plaintext against the stored hash, then
/// mint a token bound to the login. Also used at sign-up time to hash the
/// password before it reaches the store, and per request to validate
/// incoming tokens.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    expiration_days: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator with the signing secret and token lifetime.
    pub fn new(jwt_secret: &[u8], expiration_days: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            expiration_days,
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, hash)
    }

    /// Verify credentials and mint a token bound to `login`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored hash
    /// * `PasswordError` - stored hash is unreadable
    /// * `JwtError` - signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        login: &str,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let token = self.jwt_handler.issue(login, self.expiration_days)?;

        Ok(token)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - expiry has passed
    /// * `DecodingFailed` - bad signature or malformed token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token)
    }
}
