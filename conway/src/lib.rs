//! Conway's Game of Life on a bounded grid.
//!
//! The grid never wraps: cells past an edge do not exist, so edge cells have five
//! neighbours and corners three. Every generation is computed from a frozen copy of
//! the previous one. Drawing goes through the [`render::Surface`] trait so the
//! simulation carries no dependency on a windowing library.

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod render;

pub use config::GameConfig;
pub use error::{LifeError, Result};
pub use game::Game;
pub use grid::{Cell, CellMut, Grid};
pub use input::{InputEvent, Key, PointerState, ToggleMode};
pub use patterns::{Pattern, PATTERNS};
pub use render::{CellRect, Rgb, Surface};
