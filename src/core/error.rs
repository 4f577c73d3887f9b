//! Centralised error types used across the crate.
//!
//! Chart construction itself never fails; these cover the layers around it.

use std::io;

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,
    #[error("base URL `{0}` must not carry a query or fragment")]
    InvalidBaseUrl(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum BarcharError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
