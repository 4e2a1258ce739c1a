use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::trace_ctx::UNKNOWN_TRACE_ID;

/// One `request_completed` line per request, leveled by status class.
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
        let line = RequestLine::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            line.emit(status);
            result
        })
    }
}

/// Fields captured before the request is handed downstream.
struct RequestLine {
    started: Instant,
    method: String,
    path: String,
    content_length: Option<u64>,
    trace_id: String,
}

impl RequestLine {
    fn from_request(req: &ServiceRequest) -> Self {
        Self {
            started: Instant::now(),
            method: req.method().to_string(),
            path: req.path().to_string(),
            content_length: req
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|t| t.0.clone())
                .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string()),
        }
    }

    fn emit(&self, status: StatusCode) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let code = status.as_u16();
        let (trace_id, method, path, bytes) =
            (&self.trace_id, &self.method, &self.path, self.content_length);
        if status.is_server_error() {
            error!(trace_id = %trace_id, method = %method, path = %path, status = code, request_bytes = ?bytes, elapsed_ms, "request_completed");
        } else if status.is_client_error() {
            warn!(trace_id = %trace_id, method = %method, path = %path, status = code, request_bytes = ?bytes, elapsed_ms, "request_completed");
        } else {
            info!(trace_id = %trace_id, method = %method, path = %path, status = code, request_bytes = ?bytes, elapsed_ms, "request_completed");
        }
    }
}
