// apps/backend/src/middleware/cors.rs
use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the browser client:
/// - Origins come from `CLIENT_ORIGIN` (already validated by `AppConfig`)
/// - Credentials are allowed so the `token` cookie travels cross-site
/// - Only allow methods actually used by the API
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        // Methods actually used by the API
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        // Headers the browser may send
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        // Headers the browser is allowed to read from responses
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .supports_credentials()
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
