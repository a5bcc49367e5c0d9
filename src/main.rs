//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod components;
mod config;
mod handlers;
mod models;
mod services;
mod utils;
mod views;

use crate::config::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Si la configuración falla, el panel no arranca.
    let app_state = AppState::new()?;
    let addr = app_state.config.server_addr.clone();

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/", get(handlers::panel::show_panel))
        .route("/etiquetas", post(handlers::panel::crear_etiqueta))
        .route(
            "/conversiones/{id}/etiqueta",
            post(handlers::panel::asignar_etiqueta),
        )
        .with_state(app_state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Panel escuchando en {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
