//! The owner task and its handle.

use crate::error::{OwnerError, OwnerResult};
use stamp_common::{OwnerConfig, UnixTimestamp};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Messages understood by the owner task.
#[derive(Debug)]
enum Request {
    /// Overwrite the stored value. No reply.
    Set(UnixTimestamp),
    /// Send the stored value back on the enclosed slot.
    Get(oneshot::Sender<UnixTimestamp>),
}

/// Handle to the task that owns the stored timestamp.
///
/// Cheap to clone; every clone feeds the same queue. The owner task exits
/// once the last handle is dropped.
#[derive(Debug, Clone)]
pub struct StateOwner {
    tx: mpsc::Sender<Request>,
    reply_timeout: Option<Duration>,
}

impl StateOwner {
    /// Spawn the owner task on the current tokio runtime.
    ///
    /// The returned join handle resolves to the last stored value once every
    /// `StateOwner` clone has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(config: &OwnerConfig) -> (Self, JoinHandle<UnixTimestamp>) {
        let (tx, rx) = mpsc::channel(config.channel_capacity.max(1));
        let task = tokio::spawn(run_owner(rx));
        info!(
            capacity = config.channel_capacity,
            reply_timeout = ?config.reply_timeout,
            "Timestamp owner started"
        );
        let owner = Self {
            tx,
            reply_timeout: config.reply_timeout,
        };
        (owner, task)
    }

    /// Replace the stored value.
    ///
    /// Returns once the message is queued; the owner applies it before any
    /// message queued after it.
    ///
    /// # Errors
    ///
    /// [`OwnerError::Closed`] if the owner task has stopped.
    pub async fn set(&self, value: UnixTimestamp) -> OwnerResult<()> {
        self.tx
            .send(Request::Set(value))
            .await
            .map_err(|_| OwnerError::Closed)
    }

    /// Read the stored value.
    ///
    /// Waits for the owner to reach this request in its queue. Without a
    /// configured reply timeout this waits indefinitely.
    ///
    /// # Errors
    ///
    /// [`OwnerError::Closed`] if the owner task has stopped, or
    /// [`OwnerError::Timeout`] if a reply timeout is configured and elapses.
    pub async fn get(&self) -> OwnerResult<UnixTimestamp> {
        match self.reply_timeout {
            Some(limit) => tokio::time::timeout(limit, self.request_value())
                .await
                .map_err(|_| OwnerError::Timeout(limit))?,
            None => self.request_value().await,
        }
    }

    /// A handle whose queue is held open but never read.
    ///
    /// Reads wait forever, or fail with [`OwnerError::Timeout`] when
    /// `reply_timeout` is set.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[cfg(any(test, feature = "test-util"))]
    pub fn unanswered(reply_timeout: Option<Duration>) -> Self {
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let _rx = rx;
            std::future::pending::<()>().await;
        });
        Self { tx, reply_timeout }
    }

    async fn request_value(&self) -> OwnerResult<UnixTimestamp> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Request::Get(reply_tx))
            .await
            .map_err(|_| OwnerError::Closed)?;
        reply_rx.await.map_err(|_| OwnerError::Closed)
    }
}

/// Owner loop: the only code that ever touches the stored value.
async fn run_owner(mut rx: mpsc::Receiver<Request>) -> UnixTimestamp {
    let mut stored = UnixTimestamp::EPOCH;

    while let Some(request) = rx.recv().await {
        match request {
            Request::Set(value) => {
                debug!(%value, "Stored timestamp updated");
                stored = value;
            }
            Request::Get(reply) => {
                // Requester may have given up; nothing to do then.
                let _ = reply.send(stored);
            }
        }
    }

    info!(%stored, "Timestamp owner stopped");
    stored
}
