//! Request logging middleware.
//!
//! Tags each request with a short id and logs method, path, response status
//! and latency at info level. Runs inside the router's middleware stack so
//! the id is available for correlating handler logs.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;
use uuid::Uuid;

/// Log one request/response pair.
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string()[..8].to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();

    info!(
        %request_id,
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request handled"
    );

    response
}
