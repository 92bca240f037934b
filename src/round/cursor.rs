//! Playback cursor: which piece of which level is being shown.
//!
//! ## Pacing
//!
//! Each tick while not waiting:
//! 1. The entry under the pointer is resolved to a cell and its hit region
//!    becomes the highlight.
//! 2. The pace counter increments. On reaching the pacing threshold it
//!    resets and the pointer advances (never past the difficulty).
//! 3. Once the pointer equals the difficulty the cursor waits for the player
//!    and the highlight is cleared.
//!
//! A level of difficulty `d` therefore takes exactly `d * pace_ticks` ticks
//! to play.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, CellId};
use crate::core::Rect;
use crate::levels::{Level, SequenceEntry};

/// The piece currently shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub cell: CellId,
    pub rect: Rect,
}

/// Round progress through the level table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayCursor {
    /// Current level index.
    pub level: usize,

    /// Next sequence entry to reveal.
    pub pointer: usize,

    /// Ticks since the last pointer advance.
    pub pace: u32,

    /// The level's sequence has fully played.
    pub waiting: bool,

    /// Piece being shown, if any.
    pub highlight: Option<Highlight>,
}

impl PlayCursor {
    /// Create a cursor at the start of level 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the start of level 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance playback by one tick.
    pub fn tick(&mut self, level: &Level, board: &Board, pace_ticks: u32) {
        if self.waiting {
            return;
        }

        self.highlight = match level.entry(self.pointer) {
            SequenceEntry::Piece(id) => match board.cell(id) {
                Some(cell) => Some(Highlight {
                    cell: id,
                    rect: cell.hitbox(),
                }),
                None => {
                    if self.pace == 0 {
                        warn!(
                            cell = %id,
                            pointer = self.pointer,
                            "sequence entry matches no board cell"
                        );
                    }
                    None
                }
            },
            SequenceEntry::Exhausted => None,
        };

        self.pace += 1;
        if self.pace < pace_ticks {
            return;
        }

        self.pace = 0;
        let difficulty = level.difficulty() as usize;
        if self.pointer < difficulty {
            self.pointer += 1;
            debug!(level = self.level, pointer = self.pointer, difficulty, "playback advanced");
        }
        if self.pointer >= difficulty {
            self.waiting = true;
            self.highlight = None;
            debug!(level = self.level, "sequence played, waiting for player");
        }
    }
}
