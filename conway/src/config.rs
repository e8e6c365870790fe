// config.rs - Compile-time game configuration

use std::time::Duration;

use crate::error::Result;
use crate::grid::Grid;
use crate::input::ToggleMode;
use crate::patterns;

pub const N_ROWS: usize = 100;
pub const N_COLS: usize = 100;
pub const CELL_SIZE: f32 = 10.0;
pub const FPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub n_rows: usize,
    pub n_cols: usize,
    /// Side of one cell in pixels.
    pub cell_size: f32,
    /// Target frames (and generations, while running) per second.
    pub fps: u32,
    pub toggle_mode: ToggleMode,
    /// Name of a preset from `patterns::PATTERNS` to start with, centred.
    pub initial_pattern: Option<&'static str>,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        n_rows: N_ROWS,
        n_cols: N_COLS,
        cell_size: CELL_SIZE,
        fps: FPS,
        toggle_mode: ToggleMode::OncePerPress,
        initial_pattern: None,
    };

    /// Build the starting grid, validating dimensions and any initial pattern.
    pub fn grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.n_rows, self.n_cols, self.cell_size)?;
        if let Some(name) = self.initial_pattern {
            grid.load(patterns::by_name(name)?)?;
        }
        Ok(grid)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Window inner size `[width, height]` in pixels.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.n_cols as f32 * self.cell_size,
            self.n_rows as f32 * self.cell_size,
        ]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
