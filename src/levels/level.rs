//! A single difficulty level and its recall sequence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::CellId;
use crate::core::GameError;

/// Result of reading a level's sequence at a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceEntry {
    /// The cell reference at that position.
    Piece(CellId),
    /// The pointer is at or past the end of the sequence.
    Exhausted,
}

/// One difficulty level.
///
/// The sequence is empty until generated, then holds exactly `difficulty`
/// cell references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    difficulty: u8,

    /// SmallVec covers every default difficulty (at most 11) inline.
    sequence: SmallVec<[CellId; 16]>,
}

impl Level {
    /// Create a level with an empty sequence.
    #[must_use]
    pub fn new(difficulty: u8) -> Self {
        Self {
            difficulty,
            sequence: SmallVec::new(),
        }
    }

    /// Create a level with a fixed sequence; difficulty is its length.
    ///
    /// Fails with [`GameError::SequenceTooLong`] past `u8::MAX` entries.
    ///
    /// ```
    /// use memory_game::board::CellId;
    /// use memory_game::levels::{Level, SequenceEntry};
    ///
    /// let level = Level::with_sequence(&[CellId(2), CellId(7), CellId(9)]).unwrap();
    /// assert_eq!(level.difficulty(), 3);
    /// assert_eq!(level.entry(1), SequenceEntry::Piece(CellId(7)));
    /// assert_eq!(level.entry(3), SequenceEntry::Exhausted);
    /// ```
    pub fn with_sequence(sequence: &[CellId]) -> Result<Self, GameError> {
        let difficulty = u8::try_from(sequence.len()).map_err(|_| GameError::SequenceTooLong {
            len: sequence.len(),
        })?;

        Ok(Self {
            difficulty,
            sequence: SmallVec::from_slice(sequence),
        })
    }

    /// Number of pieces the player must recall.
    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// The generated sequence.
    #[must_use]
    pub fn sequence(&self) -> &[CellId] {
        &self.sequence
    }

    /// Bounds-checked read of the sequence.
    #[must_use]
    pub fn entry(&self, pointer: usize) -> SequenceEntry {
        if pointer >= self.difficulty as usize {
            return SequenceEntry::Exhausted;
        }
        match self.sequence.get(pointer) {
            Some(&id) => SequenceEntry::Piece(id),
            None => SequenceEntry::Exhausted,
        }
    }

    /// Whether the sequence holds exactly `difficulty` entries.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.sequence.len() == self.difficulty as usize
    }

    pub(crate) fn set_sequence(&mut self, sequence: SmallVec<[CellId; 16]>) {
        self.sequence = sequence;
    }
}
