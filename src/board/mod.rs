//! Board model: nine cells, their artwork, and their hit regions.

pub mod cell;
pub mod grid;

pub use cell::{Cell, CellId, ImageId};
pub use grid::Board;
