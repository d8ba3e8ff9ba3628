//! Common utilities shared across crates.
//!
//! This crate provides:
//! - The store error type
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{Operation, StoreCause, StoreError, StoreResult};
