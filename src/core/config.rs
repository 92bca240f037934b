//! Game configuration.
//!
//! Every tunable of the game is a compile-time constant. `GameConfig`
//! gathers them into one value so tests and alternative front ends can
//! adjust timings or geometry without touching the state machine:
//! - `BoardGeometry`: corner offset, cell size, and padding of the 3×3 grid
//! - Level table: base difficulties and level count
//! - Timings: idle animation, start delay, playback pacing, blink period

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Rows on the board.
pub const BOARD_ROWS: usize = 3;
/// Columns on the board.
pub const BOARD_COLS: usize = 3;
/// Number of cells, and the largest value a sequence entry can take.
pub const CELL_COUNT: usize = BOARD_ROWS * BOARD_COLS;

/// Window width in pixels.
pub const SCREEN_WIDTH: u16 = 800;
/// Window height in pixels.
pub const SCREEN_HEIGHT: u16 = 489;
/// Window title.
pub const WINDOW_TITLE: &str = "MEMORY GAME";
/// Frame rate cap requested from the platform.
pub const TARGET_FPS: u32 = 60;

/// Number of levels in the table.
pub const MAX_LEVEL: usize = 10;
/// Difficulties of the first five levels; later levels reuse them with a bonus.
pub const BASE_DIFFICULTIES: [u8; 5] = [3, 5, 6, 8, 10];

/// Seconds between frames of the idle static animation.
pub const IDLE_FRAME_INTERVAL: f32 = 0.10;
/// Seconds of idle animation before the title screen appears.
pub const IDLE_DURATION: f32 = 1.5;
/// Seconds between the start click and the first playback tick.
pub const START_DELAY: f32 = 3.0;
/// Ticks each sequence piece stays highlighted.
pub const PACE_TICKS: u32 = 60;
/// Frames per blink half-period.
pub const BLINK_PERIOD: u32 = 10;

/// Placement of the 3×3 grid on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Left edge of the first column.
    pub corner_x: f32,
    /// Top edge of the first row.
    pub corner_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Horizontal gap between columns.
    pub pad_h: f32,
    /// Vertical gap between rows.
    pub pad_v: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            corner_x: 190.0,
            corner_y: 135.0,
            cell_width: 84.0,
            cell_height: 79.0,
            pad_h: 25.0,
            pad_v: 10.0,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window size in pixels (width, height). Backends receive the whole
    /// config in [`Platform::load`](crate::present::Platform::load).
    pub screen_size: (u16, u16),

    /// Window title.
    pub title: String,

    /// Frame rate cap.
    pub target_fps: u32,

    /// Grid placement.
    pub geometry: BoardGeometry,

    /// Difficulties of the first levels.
    /// Level `i` uses `base[i % len] + i / len`.
    pub base_difficulties: Vec<u8>,

    /// Number of levels to generate.
    pub level_count: usize,

    /// Idle static animation frame interval (seconds).
    pub idle_frame_interval: f32,

    /// Idle time before the title screen (seconds).
    pub idle_duration: f32,

    /// Delay after the start click (seconds).
    pub start_delay: f32,

    /// Ticks per playback step.
    pub pace_ticks: u32,

    /// Frames per blink half-period.
    pub blink_period: u32,

    /// Re-roll level sequences whenever a new game starts.
    /// Off by default: sequences are generated once per process.
    pub regenerate_on_new_game: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_size: (SCREEN_WIDTH, SCREEN_HEIGHT),
            title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,
            geometry: BoardGeometry::default(),
            base_difficulties: BASE_DIFFICULTIES.to_vec(),
            level_count: MAX_LEVEL,
            idle_frame_interval: IDLE_FRAME_INTERVAL,
            idle_duration: IDLE_DURATION,
            start_delay: START_DELAY,
            pace_ticks: PACE_TICKS,
            blink_period: BLINK_PERIOD,
            regenerate_on_new_game: false,
        }
    }
}

impl GameConfig {
    /// Set the delay between the start click and playback.
    #[must_use]
    pub fn with_start_delay(mut self, seconds: f32) -> Self {
        self.start_delay = seconds;
        self
    }

    /// Set the ticks per playback step.
    #[must_use]
    pub fn with_pace_ticks(mut self, ticks: u32) -> Self {
        self.pace_ticks = ticks;
        self
    }

    /// Set the base difficulties and level count.
    #[must_use]
    pub fn with_levels(mut self, base: Vec<u8>, level_count: usize) -> Self {
        self.base_difficulties = base;
        self.level_count = level_count;
        self
    }

    /// Set the board geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Re-roll level sequences on every new game.
    #[must_use]
    pub fn with_regenerate_on_new_game(mut self, enabled: bool) -> Self {
        self.regenerate_on_new_game = enabled;
        self
    }

    /// Check that the configuration can drive a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.base_difficulties.is_empty() {
            return Err(GameError::invalid_config("base difficulties are empty"));
        }
        if self.base_difficulties.contains(&0) {
            return Err(GameError::invalid_config("base difficulties must be positive"));
        }
        if self.level_count == 0 {
            return Err(GameError::invalid_config("level count must be positive"));
        }
        let bonus = (self.level_count - 1) / self.base_difficulties.len();
        let hardest = self.base_difficulties.iter().copied().max().unwrap_or(0) as usize + bonus;
        if hardest > u8::MAX as usize {
            return Err(GameError::invalid_config(format!(
                "difficulty {} does not fit in a level",
                hardest
            )));
        }
        if self.pace_ticks == 0 || self.blink_period == 0 {
            return Err(GameError::invalid_config("pace ticks and blink period must be positive"));
        }
        let timings = [self.idle_frame_interval, self.idle_duration, self.start_delay];
        if timings.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(GameError::invalid_config("timings must be positive seconds"));
        }
        Ok(())
    }
}
