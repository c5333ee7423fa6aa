//! Shutdown signal shared by the network transports.

use tracing::{info, warn};

/// Resolve once the process receives Ctrl+C.
///
/// If the signal handler cannot be installed, this never resolves and the
/// transport keeps running until the process is killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
