//! Per-request tracing span.
//!
//! Every event a handler logs inherits `trace_id`, `method`, `route` and a
//! redacted `path` from the `request` span. `/my-foods/{email}` and
//! `/my-food-request/{email}` carry an address in the path, so the raw path
//! never reaches the span.
//!
//! Reads the trace id `RequestTrace` stores in request extensions. actix
//! runs the last `wrap` first, so register this one before `RequestTrace`.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};

use crate::logging::pii::redact;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());
        let route = req
            .match_pattern()
            .unwrap_or_else(|| "unmatched".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            route = %route,
            path = %loggable_path(req.path()),
        );

        Box::pin(self.service.call(req).instrument(span))
    }
}

/// Request path with emails masked, including percent-encoded `@`.
fn loggable_path(path: &str) -> String {
    redact(&path.replace("%40", "@"))
}
