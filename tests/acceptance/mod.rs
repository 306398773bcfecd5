//! Acceptance test modules.

pub mod common;
mod concurrency_test;
mod rejection_test;
mod round_trip_test;
