use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::initialize_app_state_with_url;
use crate::router::create_router;

/// Connect, build the router and serve until the listener fails.
pub async fn serve(database_url: &str, bind_address: &str) -> Result<()> {
    let state = initialize_app_state_with_url(database_url)
        .await
        .context("failed to initialize application state")?;
    let app = create_router(state);

    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;

    info!("Forwarder API listening on http://{}", bind_address);
    info!("Swagger UI at http://{}/docs, metrics at /metrics", bind_address);

    axum::serve(listener, app).await.context("server error")?;

    info!("Server shutdown gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_reports_bad_bind_address() {
        let err = serve("sqlite::memory:", "not-an-address").await.unwrap_err();
        assert!(err.to_string().contains("failed to bind not-an-address"));
    }

    #[tokio::test]
    async fn test_serve_reports_unreachable_database() {
        let err = serve("mysql://nowhere", "127.0.0.1:0").await.unwrap_err();
        assert!(err.to_string().contains("failed to initialize application state"));
    }
}
