use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

/// The identifiers the stub accepts. Requests carrying anything else are
/// rejected like the real provider rejects unknown accounts.
#[derive(Debug, Clone)]
pub struct StubCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    credentials: StubCredentials,
) -> anyhow::Result<()> {
    info!("Starting emailjs testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Credentials: {credentials:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(credentials))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(credentials: StubCredentials) -> Router<()> {
    Router::new()
        .route("/", routing::get(|| async { "OK" }))
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::new(credentials))
}

#[derive(Debug, Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Debug, Deserialize)]
struct TemplateParams {
    name: String,
    email: String,
    title: String,
    message: String,
}

async fn send(
    state: State<Arc<StubCredentials>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    if request.service_id != state.service_id
        || request.template_id != state.template_id
        || request.user_id != state.public_key
    {
        info!("Rejecting send request with credentials ({request:?})");
        return (StatusCode::FORBIDDEN, "Invalid credentials");
    }

    let TemplateParams {
        name,
        email,
        title,
        message,
    } = &request.template_params;
    info!("Delivering template email from {name} <{email}>: {title}: {message:?}");

    (StatusCode::OK, "OK")
}
