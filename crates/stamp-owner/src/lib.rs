//! Exclusive owner of the stored timestamp.
//!
//! One task holds the value for the life of the process. Everything else
//! talks to it through a [`StateOwner`] handle, which turns `set` and `get`
//! calls into messages on a single queue. The queue is the only
//! synchronization: no locks guard the value, and messages are applied
//! strictly in arrival order.
//!
//! # Usage
//!
//! ```ignore
//! use stamp_owner::StateOwner;
//! use stamp_common::{OwnerConfig, UnixTimestamp};
//!
//! let (owner, _task) = StateOwner::spawn(&OwnerConfig::default());
//! owner.set(UnixTimestamp(1_700_000_000)).await?;
//! assert_eq!(owner.get().await?, UnixTimestamp(1_700_000_000));
//! ```

mod error;
mod owner;

pub use error::*;
pub use owner::*;
