//! Round state machine.
//!
//! `GameSession` owns the board, the level table, and the play cursor, and
//! moves through Idle → Title → Running once per frame in `update`.
//! Running has no exit yet: once a level's sequence has played the cursor
//! waits for player input that nothing consumes.

pub mod cursor;
pub mod intro;
pub mod session;
pub mod state;

pub use cursor::{Highlight, PlayCursor};
pub use intro::{IdleAnimation, IdleStep, StartDelay};
pub use session::{GameSession, SessionBuilder};
pub use state::GameState;
