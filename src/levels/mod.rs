//! Level table and sequence generation.
//!
//! Difficulties are fixed by a deterministic rule; sequences are drawn once
//! per game from the session RNG.

pub mod level;
pub mod table;

pub use level::{Level, SequenceEntry};
pub use table::LevelTable;
