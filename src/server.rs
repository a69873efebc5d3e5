//! HTTP server startup logic.
//!
//! Binds the listener, logs the bound address once, and serves until the
//! process is killed. There is no graceful shutdown: termination is abrupt
//! and in-flight requests are not drained.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Server(#[from] io::Error),
}

/// Bind `0.0.0.0:{port}` and serve the router.
///
/// This function blocks until the server stops. A bind failure (e.g. port
/// already in use) is returned to the caller and is fatal.
pub async fn serve(app: Router, port: u16) -> Result<(), ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr()?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
