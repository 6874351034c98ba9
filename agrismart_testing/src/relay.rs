use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

const SEND_ROUTE: &str = "/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    credentials: RelayCredentials,
) -> anyhow::Result<()> {
    info!("Starting email relay testing server on {host}:{port}");
    info!("Relay send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!(
        "Accepting messages for service {:?}, template {:?}, public key {:?}",
        credentials.service_id, credentials.template_id, credentials.public_key
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(credentials))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(credentials: RelayCredentials) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::new(credentials))
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Deserialize)]
struct TemplateParams {
    name: String,
    email: String,
    phone: String,
    message: String,
}

async fn send(
    state: State<Arc<RelayCredentials>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    if request.service_id != state.service_id
        || request.template_id != state.template_id
        || request.user_id != state.public_key
    {
        return (StatusCode::FORBIDDEN, "Invalid credentials");
    }

    info!(
        name = %request.template_params.name,
        email = %request.template_params.email,
        phone = %request.template_params.phone,
        message_chars = request.template_params.message.chars().count(),
        "Accepted contact message"
    );

    (StatusCode::OK, "OK")
}
