//! HTTP gateway for the timestamp store.
//!
//! This crate provides:
//! - the `/timestamp` router, translating POST/GET into owner messages
//! - a server wrapper that binds and serves it
//! - a small client for the same endpoint
//!
//! # Usage
//!
//! ```ignore
//! use stamp_gateway::GatewayServer;
//! use stamp_owner::StateOwner;
//!
//! let (owner, _task) = StateOwner::spawn(&config.owner);
//! GatewayServer::new(config.gateway, owner).start().await?;
//! ```

mod api;
mod client;
mod error;

pub use api::*;
pub use client::*;
pub use error::*;

use axum::{routing::any, Extension, Router};
use stamp_common::GatewayConfig;
use stamp_owner::StateOwner;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared by the request handlers.
///
/// Holds no cross-request data of its own; the stored value lives in the
/// owner task.
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Handle to the owner task.
    pub owner: StateOwner,
    /// Largest accepted POST body in bytes.
    pub max_body_bytes: usize,
}

impl GatewayState {
    /// Handler state for `owner` with the limits from `config`.
    pub fn new(owner: StateOwner, config: &GatewayConfig) -> Self {
        Self {
            owner,
            max_body_bytes: config.max_body_bytes,
        }
    }
}

/// Build the gateway router.
///
/// `/timestamp` accepts POST and GET; every other path and method gets 405.
pub fn router(owner: StateOwner, config: &GatewayConfig) -> Router {
    let state = Arc::new(GatewayState::new(owner, config));

    Router::new()
        .route("/timestamp", any(api::timestamp))
        .fallback(api::not_routed)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// HTTP server in front of one owner.
pub struct GatewayServer {
    config: GatewayConfig,
    owner: StateOwner,
}

impl GatewayServer {
    /// Create a server for `owner` with the given configuration.
    pub fn new(config: GatewayConfig, owner: StateOwner) -> Self {
        Self { config, owner }
    }

    /// Bind the configured address and serve until the process ends.
    pub async fn start(self) -> anyhow::Result<()> {
        let bind_addr = self.config.bind_addr;
        info!(addr = %bind_addr, "Starting timestamp gateway");

        let listener = TcpListener::bind(bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener.
    ///
    /// Lets callers bind port 0 and read the chosen address first.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        let app = router(self.owner, &self.config);
        info!(%addr, "Timestamp gateway listening");

        axum::serve(listener, app).await?;

        Ok(())
    }
}
