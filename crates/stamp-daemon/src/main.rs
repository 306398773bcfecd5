//! Timestamp store daemon entry point.
//!
//! Spawns the owner task, serves the HTTP gateway in front of it, and
//! either runs until signalled or performs one demo round trip and exits.

mod signals;

use anyhow::{Context, Result};
use clap::Parser;
use stamp_common::StoreConfig;
use stamp_gateway::{GatewayServer, TimestampClient};
use stamp_owner::StateOwner;
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::signals::wait_for_shutdown;

/// Timestamp daemon command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "stampd",
    about = "Single-value timestamp store over HTTP",
    version,
    long_about = None
)]
struct Args {
    /// Path to a configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides config file; the demo client follows it).
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Start the server, post the current time, read it back, print it, exit.
    #[arg(long)]
    demo: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting timestamp daemon");

    let mut config = load_config(&args)?;
    if let Some(bind) = args.bind {
        config.gateway.bind_addr = bind;
        config.client.base_url = client_base_url(bind);
    }

    info!(
        bind = %config.gateway.bind_addr,
        capacity = config.owner.channel_capacity,
        "Configuration loaded"
    );

    if args.demo {
        run_demo(&config).await
    } else {
        run_server(&config).await
    }
}

/// Initialize logging with the specified log level.
///
/// Logs go to stderr so demo output on stdout stays clean.
fn init_logging(level: &str) {
    let filter = format!(
        "stampd={level},stamp_gateway={level},stamp_owner={level},stamp_common={level},tower_http={level}"
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `STAMPD_CONFIG_PATH` environment variable
/// 3. `/etc/stampd/config.toml` (system path)
/// 4. `config/default.toml` (local development)
/// 5. Built-in defaults
fn load_config(args: &Args) -> Result<StoreConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return StoreConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    if let Ok(env_path) = std::env::var("STAMPD_CONFIG_PATH") {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from STAMPD_CONFIG_PATH");
            return StoreConfig::from_file(&config_path).with_context(|| {
                format!("Failed to load config from STAMPD_CONFIG_PATH={env_path}")
            });
        }
        warn!(
            path = %env_path,
            "STAMPD_CONFIG_PATH set but file does not exist, checking other locations"
        );
    }

    for candidate in ["/etc/stampd/config.toml", "config/default.toml"] {
        let config_path = PathBuf::from(candidate);
        if config_path.exists() {
            info!(?config_path, "Loading config file");
            return StoreConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {candidate}"));
        }
    }

    info!("No config file found, using built-in defaults");
    Ok(StoreConfig::default())
}

/// Base URL that reaches a gateway bound to `bind` from this host.
///
/// Wildcard binds are reached over loopback.
fn client_base_url(bind: SocketAddr) -> String {
    let ip = match bind.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}", SocketAddr::new(ip, bind.port()))
}

/// Serve until SIGINT/SIGTERM. No drain on exit.
async fn run_server(config: &StoreConfig) -> Result<()> {
    let (owner, _owner_task) = StateOwner::spawn(&config.owner);
    let server = GatewayServer::new(config.gateway.clone(), owner);

    tokio::select! {
        res = server.start() => {
            res.context("Gateway stopped unexpectedly")?;
        }
        signal = wait_for_shutdown() => {
            let signal = signal.context("Failed to listen for shutdown signals")?;
            info!(%signal, "Daemon exiting");
        }
    }

    Ok(())
}

/// Start the gateway, post the current time, read it back and print it.
async fn run_demo(config: &StoreConfig) -> Result<()> {
    let (owner, _owner_task) = StateOwner::spawn(&config.owner);
    let server = GatewayServer::new(config.gateway.clone(), owner);
    let server_task = tokio::spawn(server.start());

    tokio::time::sleep(config.client.startup_delay).await;
    if server_task.is_finished() {
        server_task
            .await
            .context("Gateway task panicked")?
            .context("Gateway failed to start")?;
        anyhow::bail!("Gateway exited before the demo client ran");
    }

    let client = TimestampClient::new(&config.client.base_url);
    info!(url = client.url(), "Running demo round trip");
    let value = client
        .round_trip()
        .await
        .context("Demo round trip failed")?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{value}")?;
    stdout.flush()?;

    server_task.abort();
    Ok(())
}
