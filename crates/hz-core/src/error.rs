//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HzError` as one variant
//! via a `From` impl.

use thiserror::Error;

/// The base error type shared by all `hz-*` crates.
#[derive(Debug, Error)]
pub enum HzError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid coordinate (lon {lon}, lat {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `hz-core`.
pub type HzResult<T> = Result<T, HzError>;
