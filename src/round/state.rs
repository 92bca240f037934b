//! Top-level game states.

use serde::{Deserialize, Serialize};

/// Which screen the game is on. Exactly one at a time.
///
/// `Animating` and `Waiting` are reserved for the unfinished input phase
/// and are never entered by the state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Static-noise intro animation.
    #[default]
    Idle,
    /// "Click to start" screen.
    Title,
    /// Sequence playback.
    Running,
    Animating,
    Waiting,
    /// Reachable only through [`GameSession::force_state`](super::GameSession::force_state).
    Over,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Idle => "Idle",
            GameState::Title => "Title",
            GameState::Running => "Running",
            GameState::Animating => "Animating",
            GameState::Waiting => "Waiting",
            GameState::Over => "Over",
        };
        f.write_str(name)
    }
}
