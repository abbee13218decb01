use serde::{Deserialize, Serialize};

use crate::country::Collection;
use crate::ports::FetchError;

/// Lifecycle of the collection a consumer observes.
///
/// State transitions:
///
/// ```text
/// Idle ──→ Loading ──→ Ready(collection) ──→ Ready(enriched collection)
///              │
///              └──→ Failed(reason)
///
/// Ready / Failed ──(reload)──→ Loading
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing has been requested yet
    #[default]
    Idle,

    /// Base listing request in flight
    Loading,

    /// Base collection available; enrichment may still be running
    Ready(Collection),

    /// Base listing could not be obtained
    Failed(LoadFailure),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn collection(&self) -> Option<&Collection> {
        match self {
            Self::Ready(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Decode,
    InvalidKey,
}

/// Human-readable reason a load ended in [`LoadState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&FetchError> for LoadFailure {
    fn from(err: &FetchError) -> Self {
        let kind = match err {
            FetchError::Network(_) => FailureKind::Network,
            FetchError::Decode(_) => FailureKind::Decode,
            FetchError::InvalidKey(_) => FailureKind::InvalidKey,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for LoadFailure {
    fn from(err: FetchError) -> Self {
        Self::from(&err)
    }
}
