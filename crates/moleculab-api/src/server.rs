use crate::{create_router, AppState};
use moleculab_core::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

pub struct Server {
    state: AppState,
    addr: SocketAddr,
}

impl Server {
    pub fn new(addr: SocketAddr) -> Result<Self> {
        let state = AppState::from_env()?;
        Ok(Self { state, addr })
    }

    pub async fn run(self) -> Result<()> {
        let router = create_router(self.state);

        info!("Starting MolecuLab API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(moleculab_core::DiscoveryError::Io)?;

        info!("Server listening on http://{}", self.addr);
        info!("API documentation:");
        info!("  GET  /health - Health check");
        info!("  POST /api/discovery/generate - Generate candidate molecules");
        info!("  POST /api/discovery/predict-interactions - Predict protein interactions");
        info!("  POST /api/discovery/toxicity - Assess toxicity and ADMET properties");
        info!("  POST /api/discovery/synthesis - Propose a synthesis route");
        info!("  POST /api/discovery/explain - Explain prediction features");
        info!("  POST /api/discovery/identify - Identify a molecule by name or SMILES");
        info!("  POST /api/discovery/feedback - Record candidate feedback");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(moleculab_core::DiscoveryError::Io)?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
