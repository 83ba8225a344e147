//! Store-subsystem error type.

use thiserror::Error;

use hz_core::HzError;

/// Which upstream hazard feed an error or outcome refers to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FeedName {
    Disasters,
    Landslides,
    Boundaries,
}

impl FeedName {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedName::Disasters  => "sachet",
            FeedName::Landslides => "landslide",
            FeedName::Boundaries => "boundaries",
        }
    }
}

impl std::fmt::Display for FeedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by `hz-store`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The feed was unreachable or answered with a non-success status.
    #[error("failed to fetch {feed} feed: {reason}")]
    Fetch { feed: FeedName, reason: String },

    #[error("restricted-area boundary error: {0}")]
    Boundary(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] HzError),
}

impl StoreError {
    /// Convenience constructor used by feed implementations.
    pub fn fetch(feed: FeedName, reason: impl Into<String>) -> Self {
        StoreError::Fetch { feed, reason: reason.into() }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
