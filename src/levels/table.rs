//! The level table and its sequence generator.

use smallvec::SmallVec;
use tracing::debug;

use super::level::Level;
use crate::board::CellId;
use crate::core::{GameError, GameRng, CELL_COUNT};

/// Ordered difficulty levels, easiest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl LevelTable {
    /// Fill the table's difficulties. Deterministic.
    ///
    /// Level `i` gets `base[i % n] + i / n` where `n = base.len()`, so with
    /// the default five bases every block of five levels is one harder than
    /// the previous block. Difficulties saturate at 255.
    ///
    /// ```
    /// use memory_game::levels::LevelTable;
    ///
    /// let table = LevelTable::with_difficulties(&[3, 5, 6, 8, 10], 10);
    /// assert_eq!(table.difficulties(), vec![3, 5, 6, 8, 10, 4, 6, 7, 9, 11]);
    /// ```
    #[must_use]
    pub fn with_difficulties(base: &[u8], level_count: usize) -> Self {
        let levels = if base.is_empty() {
            Vec::new()
        } else {
            (0..level_count)
                .map(|i| {
                    let bonus = u8::try_from(i / base.len()).unwrap_or(u8::MAX);
                    Level::new(base[i % base.len()].saturating_add(bonus))
                })
                .collect()
        };

        Self { levels }
    }

    /// Build a table from explicit levels.
    #[must_use]
    pub fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Check that a prepared table can be played: at least one level, every
    /// level has a nonzero difficulty and a sequence of exactly that length.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.levels.is_empty() {
            return Err(GameError::invalid_config("level table is empty"));
        }
        for (index, level) in self.levels.iter().enumerate() {
            if level.difficulty() == 0 {
                return Err(GameError::invalid_config(format!("level {index} has difficulty 0")));
            }
            if !level.is_generated() {
                return Err(GameError::invalid_config(format!(
                    "level {index} has {} entries for difficulty {}",
                    level.sequence().len(),
                    level.difficulty()
                )));
            }
        }
        Ok(())
    }

    /// Draw every level's sequence: `difficulty` independent values in
    /// 1..=9. Values may repeat. Replaces any previous sequences.
    pub fn generate_sequences(&mut self, rng: &mut GameRng) {
        for (index, level) in self.levels.iter_mut().enumerate() {
            let sequence: SmallVec<[CellId; 16]> = (0..level.difficulty())
                .map(|_| CellId::new(rng.roll(1..=CELL_COUNT as u8)))
                .collect();

            let raw: Vec<u8> = sequence.iter().map(|c| c.raw()).collect();
            debug!(level = index, sequence = ?raw, "generated level sequence");
            level.set_sequence(sequence);
        }
    }

    /// Get a level by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the table has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Difficulties in level order.
    #[must_use]
    pub fn difficulties(&self) -> Vec<u8> {
        self.levels.iter().map(Level::difficulty).collect()
    }

    /// Iterate levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
