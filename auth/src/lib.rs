//! Authentication building blocks for the identity service
//!
//! - Password hashing (Argon2id)
//! - JWT issuance and stateless verification
//! - An [`Authenticator`] coordinating both for the sign-in flow
//!
//! Tokens are self-contained: verification checks signature and expiry
//! against the embedded claims and the server secret, with no store lookup.
//!
//! # Examples
//!
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 10);
//!
//! // Sign-up: hash the password before it reaches the store
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign-in: verify and mint a token bound to the login
//! let token = auth.authenticate("password123", &hash, "alice").unwrap();
//!
//! // Per request: validate and recover the subject
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
