// game.rs - Game controller: pause state, input dispatch and per-frame stepping

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::input::{InputEvent, Key, PointerState, ToggleMode};
use crate::patterns;
use crate::render::{self, Surface};

pub const COMMANDS: &[&str] = &[
    "Commands",
    "Press SPACE: PAUSE/UNPAUSE the game",
    "Left click: toggle a cell",
    "Press N: step one generation while paused",
    "Press C: clear the grid",
    "Press 1-6: load a preset pattern",
    "Press ESC: quit",
];

pub struct Game {
    grid: Grid,
    paused: bool,
    running: bool,
    toggle_mode: ToggleMode,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_grid(config.grid()?, config.toggle_mode))
    }

    /// Start paused with the given grid.
    pub fn from_grid(grid: Grid, toggle_mode: ToggleMode) -> Self {
        Self {
            grid,
            paused: true,
            running: true,
            toggle_mode,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// False once a quit has been requested.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn commands(&self) -> &'static [&'static str] {
        COMMANDS
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                info!(generation = self.grid.generation(), "quit requested");
                self.running = false;
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Pointer(pointer) => self.handle_pointer(&pointer),
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Pause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
            }
            Key::Clear => {
                self.grid.clear();
                info!("grid cleared");
            }
            Key::Step => {
                if self.paused {
                    self.grid.update();
                }
            }
            Key::Pattern(index) => self.load_pattern(index),
        }
    }

    fn load_pattern(&mut self, index: usize) {
        let Some(pattern) = patterns::PATTERNS.get(index) else {
            warn!(index, "no preset at this index");
            return;
        };

        match self.grid.load(pattern) {
            Ok(()) => info!(pattern = pattern.name, "pattern loaded"),
            Err(e) => warn!(pattern = pattern.name, "pattern does not fit: {e}"),
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerState) {
        if !self.toggle_mode.should_toggle(pointer) {
            return;
        }

        match pointer.cell(&self.grid) {
            Some((row, col)) => {
                if let Err(e) = self.grid.toggle(row, col) {
                    warn!("pointer toggle rejected: {e}");
                }
            }
            None => debug!(pos = ?pointer.pos, "click outside the grid ignored"),
        }
    }

    /// Advance one generation unless paused. Returns whether the grid moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.grid.update();
        true
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill(render::BACKGROUND);
        render::draw_legend(surface, self.commands());
        self.grid.render(surface);
    }
}
