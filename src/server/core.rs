use axum::Router;
use log::{info, warn};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::{AppContext, AppState, create_router};
use crate::messages::{AppleScriptSender, Messenger};
use crate::storage::StorageRoot;

pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Prepare the storage root, wire the messenger and bind the listener.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let storage_root = StorageRoot::create(config.storage_dir())?;
        let messenger = Messenger::new(
            Arc::new(AppleScriptSender::new()),
            config.messages.groups.clone(),
        );

        let state = Arc::new(AppContext::new(storage_root, messenger));
        Self::with_state(&config, state).await
    }

    /// Bind using an already built application state.
    pub async fn with_state(config: &ServerConfig, state: AppState) -> Result<Self, ServerError> {
        let socket = config.socket_addr();

        let listener = TcpListener::bind(&socket)
            .await
            .map_err(|source| ServerError::Bind {
                addr: socket.clone(),
                source,
            })?;
        info!("Server bound to {}", socket);

        Ok(Self {
            listener,
            router: create_router(state),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.local_addr()?;
        info!("🚀 Mowa server starting on http://{}", addr);

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
