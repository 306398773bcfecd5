//! Termination signals.
//!
//! SIGTERM and SIGINT end the daemon. Nothing is drained: the owner task and
//! any in-flight requests are dropped with the runtime.

use tracing::info;

/// Signal that ended the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// SIGTERM - Graceful termination request.
    Terminate,
    /// SIGINT - Interrupt (Ctrl+C).
    Interrupt,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalKind::Terminate => write!(f, "SIGTERM"),
            SignalKind::Interrupt => write!(f, "SIGINT"),
        }
    }
}

/// Wait until SIGTERM or SIGINT arrives.
///
/// On non-Unix targets only Ctrl+C is observed.
pub async fn wait_for_shutdown() -> std::io::Result<SignalKind> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind as UnixSignal};

        let mut term = signal(UnixSignal::terminate())?;
        let kind = tokio::select! {
            res = tokio::signal::ctrl_c() => { res?; SignalKind::Interrupt }
            _ = term.recv() => SignalKind::Terminate,
        };
        info!(signal = %kind, "Shutdown signal received");
        Ok(kind)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        info!(signal = %SignalKind::Interrupt, "Shutdown signal received");
        Ok(SignalKind::Interrupt)
    }
}
