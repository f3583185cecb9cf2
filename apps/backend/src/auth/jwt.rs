use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::auth::claims::SessionClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

// Keys the server owns; a client-supplied copy is dropped at issuance.
const RESERVED_CLAIMS: [&str; 4] = ["email", "iat", "exp", "nbf"];

/// Mint a session token for `email` valid for `security.token_ttl`.
pub fn mint_session_token(
    email: &str,
    extra: Map<String, Value>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let extra = extra
        .into_iter()
        .filter(|(k, _)| !RESERVED_CLAIMS.contains(&k.as_str()))
        .collect();

    let claims = SessionClaims {
        email: email.to_string(),
        iat,
        exp,
        extra,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a session token and return its claims.
///
/// Expired tokens map to `UNAUTHORIZED_EXPIRED_TOKEN`; every other decode
/// failure (bad signature, garbage, wrong algorithm) to
/// `UNAUTHORIZED_INVALID_TOKEN`.
pub fn verify_session_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<SessionClaims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized_expired_token(),
        _ => AppError::unauthorized_invalid_token(),
    })
}
