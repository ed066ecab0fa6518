use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues and verifies the service's HS256 tokens.
///
/// Verification is stateless: signature and expiry are checked against the
/// embedded claims and the server secret, never against a store.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler signing with the given secret.
    ///
    /// The secret should be at least 32 bytes for HS256 and come from
    /// configuration, never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a token bound to `login` with an `expiration_days` window.
    ///
    /// # Errors
    /// * `EncodingFailed` - signing failed; a key-configuration problem,
    ///   not a per-request condition
    pub fn issue(&self, login: &str, expiration_days: i64) -> Result<String, JwtError> {
        let claims = Claims::for_login(login, expiration_days);
        self.encode(&claims)
    }

    /// Encode prepared claims into a signed token.
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - expiry has passed
    /// * `DecodingFailed` - bad signature or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
