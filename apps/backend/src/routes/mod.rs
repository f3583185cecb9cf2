use actix_web::web;

pub mod auth;
pub mod foods;
pub mod health;
pub mod requests;

/// Register every route. `main.rs` wraps the result in the middleware
/// stack; tests register the same paths directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /, /health
    health::configure_routes(cfg);

    // Session cookie: /jwt, /logout
    auth::configure_routes(cfg);

    // Food records: /foods, /food/{id}, /foods-sortby, /my-foods/{email}
    foods::configure_routes(cfg);

    // Requests: /request/{id}, /my-food-request/{email}
    requests::configure_routes(cfg);
}
