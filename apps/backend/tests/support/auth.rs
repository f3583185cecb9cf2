//! Session token helpers for tests

use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use nourish_backend::auth::cookie::SESSION_COOKIE;
use nourish_backend::auth::jwt::mint_session_token;
use nourish_backend::state::security_config::SecurityConfig;
use serde_json::Map;

/// Mint a valid session token for `email`
pub fn mint_test_token(email: &str, sec: &SecurityConfig) -> String {
    mint_session_token(email, Map::new(), SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Mint a token issued two hours ago, past the 1h lifetime
pub fn mint_expired_token(email: &str, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .unwrap();
    mint_session_token(email, Map::new(), past_time, sec)
        .expect("should mint expired token successfully")
}

/// `token` cookie carrying a valid session for `email`
pub fn session_cookie_for(email: &str, sec: &SecurityConfig) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, mint_test_token(email, sec))
}

/// `token` cookie carrying an arbitrary raw value
pub fn raw_token_cookie(value: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, value.to_string())
}
