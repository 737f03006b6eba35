use crate::api::routes;
use crate::config::ServerConfig;
use crate::errors::Error;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Binds the listening socket for the HTTP entry process.
///
/// # Errors
/// Returns [`Error::Bind`] if the address is already in use or otherwise
/// unavailable. The caller treats this as fatal.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, Error> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Serves the Request Router on `listener` until `shutdown` completes.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::app();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Serve)
}

/// Starts and runs the HTTP server until SIGINT or SIGTERM
///
/// # Arguments
/// * `config` - Address to listen on
///
/// # Errors
/// Returns [`Error::Bind`] when the address is unavailable and
/// [`Error::Serve`] if the accept loop fails.
pub async fn launch_server(config: &ServerConfig) -> Result<(), Error> {
    let listener = bind(config.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    info!(address = %local_addr, "Starting HTTP server on http://{local_addr}");

    serve(listener, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
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

    info!("Shutdown signal received, draining connections");
}
