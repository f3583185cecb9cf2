use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Session token lifetime.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Configuration for session token signing and the cookie that carries it
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// Whether the session cookie carries the `Secure` attribute
    pub cookie_secure: bool,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: SESSION_TTL,
            cookie_secure: true,
        }
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
