// input.rs - Backend-neutral input events fed to the game each frame

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Pause or resume the simulation.
    Pause,
    /// Kill every cell.
    Clear,
    /// Advance exactly one generation while paused.
    Step,
    /// Load the preset at this index of `patterns::PATTERNS`.
    Pattern(usize),
}

/// Primary pointer button and position for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Position relative to the grid's top-left corner, if the pointer is over the window.
    pub pos: Option<(f32, f32)>,
    /// Button is held this frame.
    pub primary_down: bool,
    /// Button went down this frame.
    pub primary_pressed: bool,
}

impl PointerState {
    /// Grid cell under the pointer, if any.
    pub fn cell(&self, grid: &Grid) -> Option<(usize, usize)> {
        let (x, y) = self.pos?;
        grid.cell_at(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    Key(Key),
    Pointer(PointerState),
}

/// How a held mouse button turns into cell toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// One toggle per button press.
    #[default]
    OncePerPress,
    /// Toggle on every frame the button is held, so a held cell flickers.
    WhileHeld,
}

impl ToggleMode {
    pub fn should_toggle(self, pointer: &PointerState) -> bool {
        match self {
            ToggleMode::OncePerPress => pointer.primary_pressed,
            ToggleMode::WhileHeld => pointer.primary_down,
        }
    }
}
