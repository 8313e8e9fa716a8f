//! HTTP request handlers
//!
//! Every handler is the same shape: build an operation context, then
//! decode -> validate -> store call -> respond. A helper that returns
//! `Err` hands back the terminal response; the handler returns it as-is.

use crate::api::{BatchCreateRequest, CreateUserRequest, HealthResponse};
use crate::metrics;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Response;
use manifold_core::{
    decode_request, respond_data, respond_error, respond_ok, validate_request, OpContext,
};
use std::time::Instant;

/// Create a single user
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Response {
    let ctx = OpContext::new("users.create");
    let start = Instant::now();

    let req: CreateUserRequest = match decode_request(&ctx, &body) {
        Ok(req) => req,
        Err(response) => return finish(&ctx, start, response),
    };
    if let Err(response) = validate_request(&ctx, &req) {
        return finish(&ctx, start, response);
    }

    let response = match state.store.create(&req) {
        Ok(record) => respond_data(&ctx, record),
        Err(err) => respond_error(&ctx, &err),
    };
    finish(&ctx, start, response)
}

/// Fetch a user by id
pub async fn get_user(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let ctx = OpContext::new("users.get");
    let start = Instant::now();

    let response = match state.store.get(id) {
        Ok(record) => respond_data(&ctx, record),
        Err(err) => respond_error(&ctx, &err),
    };
    finish(&ctx, start, response)
}

/// Delete a user by id
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let ctx = OpContext::new("users.delete");
    let start = Instant::now();

    let response = match state.store.delete(id) {
        Ok(()) => respond_ok(&ctx),
        Err(err) => respond_error(&ctx, &err),
    };
    finish(&ctx, start, response)
}

/// Create several users in one request
pub async fn batch_create_users(State(state): State<AppState>, body: Bytes) -> Response {
    let ctx = OpContext::new("users.batch_create");
    let start = Instant::now();

    let req: BatchCreateRequest = match decode_request(&ctx, &body) {
        Ok(req) => req,
        Err(response) => return finish(&ctx, start, response),
    };
    if let Err(response) = validate_request(&ctx, &req) {
        return finish(&ctx, start, response);
    }

    let response = match state.store.create_batch(&req.users) {
        Ok(outcome) => respond_data(&ctx, outcome),
        Err(err) => respond_error(&ctx, &err),
    };
    finish(&ctx, start, response)
}

/// Health check - liveness probe
pub async fn health_live(State(state): State<AppState>) -> Response {
    let ctx = OpContext::new("health.live");
    respond_data(
        &ctx,
        HealthResponse {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.uptime_seconds(),
            users: state.store.len(),
        },
    )
}

/// Prometheus metrics endpoint
pub async fn metrics_endpoint() -> String {
    metrics::render()
}

fn finish(ctx: &OpContext, start: Instant, response: Response) -> Response {
    metrics::record_request(ctx.op(), response.status(), start.elapsed());
    response
}
