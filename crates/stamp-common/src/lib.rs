#![doc = "Common types shared across the timestamp store workspace."]

pub mod config;
pub mod error;
pub mod timestamp;

pub use config::*;
pub use error::*;
pub use timestamp::*;
