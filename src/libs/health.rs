//! Liveness endpoint for external supervisors.
//!
//! Some hosting environments stop processes that expose no reachable HTTP
//! port. This responder answers `GET /` with a fixed body and nothing else;
//! it runs as its own task and shares no state with the notification loop.

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Body returned on every probe.
const STATUS_BODY: &str = "🕌 miqat prayer notifier is running";

/// Serves the liveness route until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let app = Router::new().route("/", get(|| async { STATUS_BODY }));
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
