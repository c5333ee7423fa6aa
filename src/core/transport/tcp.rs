//! TCP transport implementation.
//!
//! Raw TCP socket transport with JSON-RPC messages (line-delimited).
//! Each accepted connection gets its own rmcp service over a clone of the
//! server.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig, shutdown_signal};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Run the TCP transport until a shutdown signal arrives.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("TCP transport stopping");
                    return Ok(());
                }
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer_addr)) => {
                        info!("Accepted connection from {}", peer_addr);

                        // Set TCP_NODELAY to disable Nagle's algorithm
                        if let Err(e) = stream.set_nodelay(true) {
                            warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                        }

                        tokio::spawn(Self::handle_connection(server.clone(), stream, peer_addr));
                    }
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        // Small delay to avoid spinning on persistent errors
                        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    }
                },
            }
        }
    }

    /// Serve a single TCP connection until the client disconnects.
    async fn handle_connection(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                info!("Client {} connected, serving...", peer_addr);
                s
            }
            Err(e) => {
                warn!("Failed to initialize service for {}: {}", peer_addr, e);
                return;
            }
        };

        if let Err(e) = service.waiting().await {
            warn!("Error while serving client {}: {:?}", peer_addr, e);
        } else {
            info!("Client {} disconnected cleanly", peer_addr);
        }
    }
}
