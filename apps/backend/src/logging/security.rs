use tracing::warn;

use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A request reached a gated route without a usable session token.
pub fn session_rejected(code: ErrorCode) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_REJECTED",
        %trace_id,
        reason = code.as_str(),
        "Session verification failed"
    );
}

/// A verified session asked for another identity's records.
pub fn ownership_denied(session_email: &str, requested_email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_OWNERSHIP_DENIED",
        %trace_id,
        session_email = %Redacted(session_email),
        requested_email = %Redacted(requested_email),
        "Ownership check failed"
    );
}
