use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::logging::pii::Redacted;

/// Emits one `request_completed` event per request, leveled by status class.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let record = AccessRecord {
            method: req.method().to_string(),
            path: req.path().to_string(),
            // Route pattern keeps ids and emails out of the aggregated field.
            route: req.match_pattern().unwrap_or_else(|| "unmatched".to_string()),
            trace_id: req
                .extensions()
                .get::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            record.emit(status, start.elapsed().as_micros() as u64);

            result
        })
    }
}

struct AccessRecord {
    method: String,
    path: String,
    route: String,
    trace_id: String,
}

impl AccessRecord {
    fn emit(&self, status: StatusCode, duration_us: u64) {
        let status_code = status.as_u16();
        let path = Redacted(&self.path);

        if status.is_server_error() {
            error!(event = "request_completed", http.method = %self.method, http.route = %self.route, url.path = %path, http.status_code = status_code, duration_us, trace_id = %self.trace_id);
        } else if status.is_client_error() {
            warn!(event = "request_completed", http.method = %self.method, http.route = %self.route, url.path = %path, http.status_code = status_code, duration_us, trace_id = %self.trace_id);
        } else {
            info!(event = "request_completed", http.method = %self.method, http.route = %self.route, url.path = %path, http.status_code = status_code, duration_us, trace_id = %self.trace_id);
        }
    }
}
