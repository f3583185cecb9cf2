//! Authorization gate in front of the owner-scoped routes.
//!
//! The gate is injected through `AppState` so the same handler set serves
//! both the guarded deployment (`TokenGate`) and the open one (`OpenGate`).

use std::fmt::Debug;

use crate::auth::claims::SessionClaims;
use crate::auth::jwt::verify_session_token;
use crate::error::AppError;
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

/// Identity bound to a request after the gate has looked at it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIdentity {
    Verified(SessionClaims),
    /// Produced only by gates that do not check tokens.
    Anonymous,
}

impl SessionIdentity {
    pub fn email(&self) -> Option<&str> {
        match self {
            SessionIdentity::Verified(claims) => Some(claims.email.as_str()),
            SessionIdentity::Anonymous => None,
        }
    }
}

pub trait AuthGate: Send + Sync + Debug {
    /// Short name for logs ("token", "open").
    fn name(&self) -> &'static str;

    /// Turn the raw `token` cookie value (if any) into an identity.
    fn verify(&self, token: Option<&str>) -> Result<SessionIdentity, AppError>;

    /// Allow only when `identity` may see records belonging to `requested_email`.
    fn authorize_owner(
        &self,
        identity: &SessionIdentity,
        requested_email: &str,
    ) -> Result<(), AppError>;
}

/// Cookie token plus exact-match ownership check.
#[derive(Debug, Clone)]
pub struct TokenGate {
    security: SecurityConfig,
}

impl TokenGate {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}

impl AuthGate for TokenGate {
    fn name(&self) -> &'static str {
        "token"
    }

    fn verify(&self, token: Option<&str>) -> Result<SessionIdentity, AppError> {
        let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
            let err = AppError::unauthorized_missing_token();
            security::session_rejected(err.code());
            err
        })?;

        verify_session_token(token, &self.security)
            .map(SessionIdentity::Verified)
            .inspect_err(|err| security::session_rejected(err.code()))
    }

    fn authorize_owner(
        &self,
        identity: &SessionIdentity,
        requested_email: &str,
    ) -> Result<(), AppError> {
        match identity {
            SessionIdentity::Verified(claims) if claims.email == requested_email => Ok(()),
            SessionIdentity::Verified(claims) => {
                security::ownership_denied(&claims.email, requested_email);
                Err(AppError::forbidden())
            }
            SessionIdentity::Anonymous => Err(AppError::unauthorized_missing_token()),
        }
    }
}

/// Lets every request through. Development deployments only.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AuthGate for OpenGate {
    fn name(&self) -> &'static str {
        "open"
    }

    fn verify(&self, _token: Option<&str>) -> Result<SessionIdentity, AppError> {
        Ok(SessionIdentity::Anonymous)
    }

    fn authorize_owner(
        &self,
        _identity: &SessionIdentity,
        _requested_email: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }
}
