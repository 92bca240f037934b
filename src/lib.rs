//! # memory-game
//!
//! Core of a "Simon says" style memory game: a static-noise intro, a title
//! screen, then playback of a random sequence of board pieces per level.
//!
//! ## Design Principles
//!
//! 1. **Session, not globals**: all mutable state lives in a `GameSession`
//!    owned by the frame loop and passed by reference.
//!
//! 2. **Update mutates, render reads**: every state transition happens in
//!    `GameSession::update`; `present::compose` only borrows the session.
//!
//! 3. **Backend-agnostic**: windowing, input, drawing and audio sit behind
//!    the `Platform` trait. The crate ships a headless backend.
//!
//! ## Known Gaps
//!
//! Player input is never matched against the sequence, and nothing leaves
//! Running. After a level plays, the cursor waits indefinitely.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, geometry, seedable RNG
//! - `board`: the 3×3 grid, piece images, hit regions
//! - `levels`: difficulty table and sequence generation
//! - `round`: game states, play cursor, the session
//! - `present`: display lists, assets, platform seam, frame loop
//! - `logging`: tracing subscriber setup

pub mod board;
pub mod core;
pub mod levels;
pub mod logging;
pub mod present;
pub mod round;

// Re-export commonly used types
pub use crate::core::{BoardGeometry, GameConfig, GameError, GameRng, Rect, ResourceLoadError};

pub use crate::board::{Board, Cell, CellId, ImageId};

pub use crate::levels::{Level, LevelTable, SequenceEntry};

pub use crate::round::{GameSession, GameState, Highlight, PlayCursor, SessionBuilder};

pub use crate::present::{
    compose, run, AudioSink, DrawCommand, FrameInput, HeadlessPlatform, Platform,
    ResourceManifest, Sound, TextureId,
};
