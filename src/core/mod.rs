//! Core types: configuration, errors, geometry, RNG.
//!
//! These are shared by the board, the level table, and the round state
//! machine. Nothing here knows about game states beyond error reporting.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{BoardGeometry, GameConfig, BOARD_COLS, BOARD_ROWS, CELL_COUNT};
pub use error::{GameError, ResourceLoadError};
pub use geometry::Rect;
pub use rng::GameRng;
