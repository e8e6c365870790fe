// render.rs - Drawing contract between the grid and whatever paints the window

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Screen-space square covered by one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CellRect {
    pub fn of(row: usize, col: usize, cell_size: f32) -> Self {
        Self {
            x: col as f32 * cell_size,
            y: row as f32 * cell_size,
            size: cell_size,
        }
    }
}

/// Minimal set of primitives the simulation needs from a graphics backend.
pub trait Surface {
    /// Paint the whole surface with one colour.
    fn fill(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: CellRect, color: Rgb);
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb);
    /// Render one line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, pos: (f32, f32), text: &str, size: f32, color: Rgb);
}

pub const LINE_COLOR: Rgb = Rgb::BLACK;
pub const LIVE_COLOR: Rgb = Rgb::BLACK;
pub const BACKGROUND: Rgb = Rgb::WHITE;

pub const LEGEND_ORIGIN: (f32, f32) = (10.0, 10.0);
pub const LEGEND_FONT_SIZE: f32 = 20.0;
pub const LEGEND_LINE_GAP: f32 = 5.0;

impl Grid {
    /// Draw the cell boundaries and fill every live cell, straight from current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = self.cell_size();
        let (width, height) = (self.width(), self.height());

        for row in 0..=self.n_rows() {
            let y = row as f32 * size;
            surface.draw_line((0.0, y), (width, y), LINE_COLOR);
        }
        for col in 0..=self.n_cols() {
            let x = col as f32 * size;
            surface.draw_line((x, 0.0), (x, height), LINE_COLOR);
        }

        for (row, col) in self.live_cells() {
            surface.fill_rect(CellRect::of(row, col, size), LIVE_COLOR);
        }
    }
}

/// Stack `lines` downward from `LEGEND_ORIGIN`.
pub fn draw_legend<S: Surface + ?Sized>(surface: &mut S, lines: &[&str]) {
    let (x, mut y) = LEGEND_ORIGIN;
    for line in lines {
        surface.draw_text((x, y), line, LEGEND_FONT_SIZE, Rgb::BLACK);
        y += LEGEND_FONT_SIZE + LEGEND_LINE_GAP;
    }
}
