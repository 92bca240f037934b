//! Error types.
//!
//! Sequence exhaustion during playback is not an error; see
//! [`SequenceEntry`](crate::levels::SequenceEntry).

use std::path::PathBuf;

use derive_more::{Display, Error};

use crate::round::GameState;

/// A required asset is missing or unreadable.
///
/// Fatal at startup: the game cannot present without its assets.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("failed to load resource {}: {}", path.display(), reason)]
pub struct ResourceLoadError {
    /// Path of the offending asset.
    pub path: PathBuf,
    /// What went wrong.
    pub reason: String,
}

impl ResourceLoadError {
    /// Create a new resource error.
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GameError {
    /// An asset could not be loaded.
    #[display("{source}")]
    ResourceLoad { source: ResourceLoadError },

    /// Level sequences can only be generated before the game leaves Idle.
    #[display("level sequences can only be generated while idle (state: {state})")]
    NotIdle { state: GameState },

    /// A level sequence is longer than the largest difficulty.
    #[display("sequence of {len} entries exceeds the maximum difficulty of 255")]
    SequenceTooLong { len: usize },

    /// The configuration cannot drive a game.
    #[display("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<ResourceLoadError> for GameError {
    fn from(source: ResourceLoadError) -> Self {
        Self::ResourceLoad { source }
    }
}
