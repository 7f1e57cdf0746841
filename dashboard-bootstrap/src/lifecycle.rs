use std::path::Path;

use anyhow::Result;
use axum::Router;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dashboard_application::queries::dashboard_queries;
use dashboard_application::AppState;
use dashboard_interfaces_http::{build_router, render_dashboard, StylesheetMode};

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone(config_path: Option<&Path>) -> Result<()> {
    let context = AppContext::new(config_path).await?;
    serve(context.state).await
}

pub async fn serve(state: AppState) -> Result<()> {
    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Writes a self-contained copy of the page to `out`, or stdout when absent.
pub async fn render_standalone(config_path: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let context = AppContext::new(config_path).await?;
    render_to(&context.state, out).await
}

pub async fn render_to(state: &AppState, out: Option<&Path>) -> Result<()> {
    let view = dashboard_queries::build_dashboard_view(state).await?;
    state.metrics.record_render();
    let html = render_dashboard(&view, StylesheetMode::Inline);

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            tokio::fs::write(path, html.as_bytes()).await?;
            info!(rows = view.table.rows.len(), "dashboard written to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
