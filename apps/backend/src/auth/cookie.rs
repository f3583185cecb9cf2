//! The `token` cookie that carries the session.

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};

use crate::state::security_config::SecurityConfig;

pub const SESSION_COOKIE: &str = "token";

/// HTTP-only, `SameSite=None` cookie holding a freshly minted token.
pub fn session_cookie(token: String, security: &SecurityConfig) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .secure(security.cookie_secure)
        .same_site(SameSite::None)
        .path("/")
        .max_age(CookieDuration::seconds(security.token_ttl.as_secs() as i64))
        .finish()
}

/// Removal cookie for `token`: same attributes, empty value, `Max-Age=0`.
pub fn removal_cookie(security: &SecurityConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .http_only(true)
        .secure(security.cookie_secure)
        .same_site(SameSite::None)
        .path("/")
        .finish();
    cookie.make_removal();
    cookie
}
