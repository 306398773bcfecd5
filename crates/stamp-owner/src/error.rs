use thiserror::Error;

/// Failures seen by a [`StateOwner`](crate::StateOwner) handle.
///
/// The owner task itself never fails; these describe the handle losing
/// contact with it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OwnerError {
    /// The owner task is no longer receiving messages.
    #[error("timestamp owner is not running")]
    Closed,

    /// The owner did not answer a read within the configured timeout.
    #[error("timestamp owner did not reply within {0:?}")]
    Timeout(std::time::Duration),
}

/// Convenience type alias for owner operations.
pub type OwnerResult<T> = Result<T, OwnerError>;
