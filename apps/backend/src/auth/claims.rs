//! Session claims carried by the `token` cookie.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity decoded from a verified session token.
///
/// `email` is the only identity key the server relies on; anything else the
/// client supplied at issuance (`name`, `photo`, ...) rides along in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /jwt`.
#[derive(Debug, Deserialize, Clone)]
pub struct IdentityPayload {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
