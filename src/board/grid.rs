//! The 3×3 board.

use tracing::debug;

use super::cell::{Cell, CellId, ImageId};
use crate::core::{BoardGeometry, GameRng, Rect, BOARD_COLS, BOARD_ROWS, CELL_COUNT};

/// Fixed grid of nine cells, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build the grid: identities 0..8 row-major, hit regions from geometry.
    ///
    /// Column index scales `cell_width + pad_h`, row index scales
    /// `cell_height + pad_v`. Cells start without artwork.
    #[must_use]
    pub fn build(geometry: &BoardGeometry) -> Self {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let hitbox = Rect::new(
                    geometry.corner_x + col as f32 * (geometry.cell_width + geometry.pad_h),
                    geometry.corner_y + row as f32 * (geometry.cell_height + geometry.pad_v),
                    geometry.cell_width,
                    geometry.cell_height,
                );
                let id = CellId::new((row * BOARD_COLS + col) as u8);
                cells.push(Cell::new(id, row as u8, col as u8, hitbox));
            }
        }

        Self { cells }
    }

    /// Assign a uniformly random permutation of images 1..=9, row-major.
    pub fn assign_images(&mut self, rng: &mut GameRng) {
        let mut images: Vec<u8> = (1..=CELL_COUNT as u8).collect();
        rng.shuffle(&mut images);

        for (cell, image) in self.cells.iter_mut().zip(images) {
            cell.image = Some(ImageId::new(image));
            debug!(cell = %cell.id, image, "assigned piece image");
        }
    }

    /// Get a cell by identity.
    ///
    /// Returns `None` for identities with no cell (sequence entry 9).
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    /// Get a cell by grid position.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < BOARD_ROWS && col < BOARD_COLS {
            self.cells.get(row * BOARD_COLS + col)
        } else {
            None
        }
    }

    /// Iterate cells row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Images in row-major order. `None` entries mean images are unassigned.
    #[must_use]
    pub fn images(&self) -> Vec<Option<ImageId>> {
        self.cells.iter().map(|c| c.image).collect()
    }
}
