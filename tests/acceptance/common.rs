//! Common utilities for acceptance tests.

#![allow(dead_code)]

use stamp_common::{GatewayConfig, OwnerConfig};
use stamp_gateway::{GatewayServer, TimestampClient};
use stamp_owner::StateOwner;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// A gateway running on a loopback port for the duration of a test.
pub struct TestGateway {
    /// Address the gateway is listening on.
    pub addr: SocketAddr,
    /// Client pointed at the gateway.
    pub client: TimestampClient,
}

impl TestGateway {
    /// Full URL of `/timestamp`.
    pub fn url(&self) -> String {
        format!("http://{}/timestamp", self.addr)
    }

    /// URL of an arbitrary path on the gateway.
    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn an owner and a gateway bound to `127.0.0.1:0`.
pub async fn spawn_gateway() -> TestGateway {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    let (owner, _task) = StateOwner::spawn(&OwnerConfig::default());
    let config = GatewayConfig {
        bind_addr: addr,
        ..GatewayConfig::default()
    };
    tokio::spawn(GatewayServer::new(config, owner).serve(listener));

    TestGateway {
        addr,
        client: TimestampClient::new(&format!("http://{addr}")),
    }
}
