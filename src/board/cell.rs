//! Board cells and their identifiers.
//!
//! ## ID Layout
//!
//! - `CellId`: 0..8, assigned row-major when the board is built
//! - `ImageId`: 1..9, the piece artwork shown in a cell
//!
//! Level sequences store `CellId`s drawn from 1..=9, so a sequence entry of
//! 9 refers to no cell on the board. Lookups return `Option` for that reason.

use serde::{Deserialize, Serialize};

use crate::core::Rect;

/// Stable identity of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Index of the artwork assigned to a cell (1..9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u8);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// One of the nine board positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Stable identity (row-major index).
    pub id: CellId,

    /// Grid row.
    pub row: u8,

    /// Grid column.
    pub col: u8,

    /// Reserved for matching player input; never set yet.
    pub selected: bool,

    /// Screen-space hit region. Fixed once the board is built.
    hitbox: Rect,

    /// Assigned artwork. `None` until images are assigned.
    pub image: Option<ImageId>,
}

impl Cell {
    /// Create an unselected cell without artwork.
    #[must_use]
    pub fn new(id: CellId, row: u8, col: u8, hitbox: Rect) -> Self {
        Self {
            id,
            row,
            col,
            selected: false,
            hitbox,
            image: None,
        }
    }

    /// Screen-space hit region.
    #[must_use]
    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(CellId::new(4).raw(), 4);
        assert_eq!(ImageId::new(9).raw(), 9);
        assert_eq!(format!("{}", CellId(3)), "Cell(3)");
        assert_eq!(format!("{}", ImageId(7)), "Image(7)");
    }

    #[test]
    fn test_new_cell() {
        let cell = Cell::new(CellId(2), 0, 2, Rect::new(408.0, 135.0, 84.0, 79.0));

        assert!(!cell.selected);
        assert!(cell.image.is_none());
        assert_eq!(cell.hitbox().x, 408.0);
    }

    #[test]
    fn test_serialization() {
        let mut cell = Cell::new(CellId(1), 0, 1, Rect::new(1.0, 2.0, 3.0, 4.0));
        cell.image = Some(ImageId(5));

        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
