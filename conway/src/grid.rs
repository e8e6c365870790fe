// grid.rs - Bounded grid of cells for Conway's Game of Life

use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{LifeError, Result};
use crate::patterns::Pattern;

/// A single grid position and its state, copied out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }
}

/// Borrowed handle onto one stored cell; toggling it writes straight into the grid.
#[derive(Debug)]
pub struct CellMut<'a> {
    row: usize,
    col: usize,
    alive: &'a mut bool,
}

impl CellMut<'_> {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        *self.alive
    }

    pub fn toggle(&mut self) {
        *self.alive = !*self.alive;
    }

    pub fn get(&self) -> Cell {
        Cell::new(self.row, self.col, *self.alive)
    }
}

/// Fixed-size grid with no wraparound. Cells outside the edges simply do not exist.
///
/// State lives in a flat buffer indexed `row * n_cols + col`. A second buffer of the
/// same size receives each new generation and is then swapped in, so every decision
/// for generation N+1 is taken from an untouched copy of generation N.
#[derive(Debug, Clone)]
pub struct Grid {
    n_rows: usize,
    n_cols: usize,
    cell_size: f32,
    cells: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

/// B3/S23: survive on 2 or 3, born on exactly 3.
pub(crate) fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true, // Birth
        _ => false, // Death or stays dead
    }
}

/// Indices within one step of `center`, clipped to `0..len`.
fn span(center: usize, len: usize) -> Range<usize> {
    center.saturating_sub(1)..(center + 2).min(len)
}

impl Grid {
    pub fn new(n_rows: usize, n_cols: usize, cell_size: f32) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(LifeError::InvalidDimensions { n_rows, n_cols });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(LifeError::InvalidCellSize(cell_size));
        }

        let len = n_rows
            .checked_mul(n_cols)
            .ok_or(LifeError::InvalidDimensions { n_rows, n_cols })?;
        Ok(Self {
            n_rows,
            n_cols,
            cell_size,
            cells: vec![false; len],
            next: vec![false; len],
            generation: 0,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Pixel width of the drawn grid.
    pub fn width(&self) -> f32 {
        self.n_cols as f32 * self.cell_size
    }

    /// Pixel height of the drawn grid.
    pub fn height(&self) -> f32 {
        self.n_rows as f32 * self.cell_size
    }

    /// Number of `update` calls since construction or the last `clear`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.n_rows && col < self.n_cols
    }

    fn out_of_range(&self, row: usize, col: usize) -> LifeError {
        LifeError::OutOfRange {
            row,
            col,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.n_cols + col)
        } else {
            Err(self.out_of_range(row, col))
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        Ok(Cell::new(row, col, self.cells[idx]))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<CellMut<'_>> {
        let idx = self.index(row, col)?;
        Ok(CellMut {
            row,
            col,
            alive: &mut self.cells[idx],
        })
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| Cell::new(idx / self.n_cols, idx % self.n_cols, alive))
    }

    /// `(row, col)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(Cell::is_alive)
            .map(|cell| (cell.row(), cell.col()))
    }

    /// Cells adjacent to `(row, col)`, diagonals included, clipped at the edges.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Vec<Cell>> {
        self.index(row, col)?;

        let mut out = Vec::with_capacity(8);
        for r in span(row, self.n_rows) {
            for c in span(col, self.n_cols) {
                if r == row && c == col {
                    continue;
                }
                out.push(Cell::new(r, c, self.cells[r * self.n_cols + c]));
            }
        }
        Ok(out)
    }

    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.alive_neighbors(row, col))
    }

    // Caller guarantees (row, col) is in range.
    fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for r in span(row, self.n_rows) {
            for c in span(col, self.n_cols) {
                if (r != row || c != col) && self.cells[r * self.n_cols + c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether the cell at `(row, col)` changes state in the next generation.
    pub fn rule(&self, row: usize, col: usize) -> Result<bool> {
        let alive = self.is_alive(row, col)?;
        Ok(next_state(alive, self.alive_neighbors(row, col)) != alive)
    }

    /// Advance the whole grid by one generation.
    pub fn update(&mut self) {
        for row in 0..self.n_rows {
            for col in 0..self.n_cols {
                let idx = row * self.n_cols + col;
                let count = self.alive_neighbors(row, col);
                self.next[idx] = next_state(self.cells[idx], count);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, "generation advanced");
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        let mut cell = self.cell_mut(row, col)?;
        cell.toggle();
        debug!(row, col, alive = cell.is_alive(), "cell toggled");
        Ok(())
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Kill every cell and restart the generation count.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    fn pattern_indices(
        &self,
        pattern: &Pattern,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<Vec<usize>> {
        pattern
            .cells
            .iter()
            .map(|&(dr, dc)| match (origin_row.checked_add(dr), origin_col.checked_add(dc)) {
                (Some(row), Some(col)) => self.index(row, col),
                // Past usize::MAX is past any grid edge.
                _ => Err(self.out_of_range(
                    origin_row.saturating_add(dr),
                    origin_col.saturating_add(dc),
                )),
            })
            .collect()
    }

    /// Bring `pattern` to life with its top-left corner at `(origin_row, origin_col)`.
    ///
    /// Either every cell of the pattern fits and is set alive, or the grid is left
    /// untouched and the first offending position is reported.
    pub fn place(
        &mut self,
        pattern: &Pattern,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<()> {
        for idx in self.pattern_indices(pattern, origin_row, origin_col)? {
            self.cells[idx] = true;
        }
        Ok(())
    }

    /// Replace the grid contents with `pattern`, centred.
    pub fn load(&mut self, pattern: &Pattern) -> Result<()> {
        let (rows, cols) = pattern.extent();
        let origin_row = self.n_rows.saturating_sub(rows) / 2;
        let origin_col = self.n_cols.saturating_sub(cols) / 2;

        let indices = self.pattern_indices(pattern, origin_row, origin_col)?;
        self.clear();
        for idx in indices {
            self.cells[idx] = true;
        }
        Ok(())
    }

    /// Map a pixel position to the `(row, col)` underneath it.
    ///
    /// Rows come from `y` and columns from `x`. Anything left of, above, or beyond
    /// the drawn grid yields `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }

        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        self.contains(row, col).then_some((row, col))
    }
}

/// Two grids are equal when they share a shape and the same cells are alive.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.n_rows == other.n_rows
            && self.n_cols == other.n_cols
            && self.cell_size == other.cell_size
            && self.cells == other.cells
    }
}
