//! Fixed-size 2D grid of cells and the growth update engine.

use crate::cell::{Cell, RuleHandle};
use crate::error::GridError;
use crate::pattern::{Neighborhood, Pattern};
use crate::rule::{Direction, Growth, RuleTable};
use crate::symbol::Symbol;

/// A fixed-width, fixed-height grid of [`Cell`]s, row-major.
///
/// Dimensions are set at construction and never change: directional
/// insertions shift part of a row or column toward a boundary and discard
/// the cell that would fall past it, so every operation preserves
/// `width × height`.
///
/// Neighborhood queries wrap toroidally on all four edges. Caller-addressed
/// accessors do not wrap; out-of-range coordinates fail with
/// [`GridError::OutOfBounds`].
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid of empty cells, each with its own empty rule table.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| Cell::default()).collect())
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the cell rows.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    fn check(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        self.check(x, y)?;
        Ok(&self.cells[y][x])
    }

    /// Mutable access to the cell at `(x, y)`.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        self.check(x, y)?;
        Ok(&mut self.cells[y][x])
    }

    /// The state of the cell at `(x, y)`.
    pub fn state(&self, x: usize, y: usize) -> Result<&Symbol, GridError> {
        Ok(self.cell(x, y)?.state())
    }

    /// Sets the state of the cell at `(x, y)`.
    pub fn set_state(
        &mut self,
        x: usize,
        y: usize,
        state: impl Into<Symbol>,
    ) -> Result<(), GridError> {
        self.cell_mut(x, y)?.set_state(state);
        Ok(())
    }

    /// Replaces the rule table of the cell at `(x, y)` with a fresh
    /// private one.
    pub fn set_rules(&mut self, x: usize, y: usize, rules: RuleTable) -> Result<(), GridError> {
        self.cell_mut(x, y)?.set_rules(rules);
        Ok(())
    }

    /// Adds or overwrites one rule on the cell at `(x, y)`.
    pub fn add_rule(
        &mut self,
        x: usize,
        y: usize,
        pattern: Pattern,
        growth: Growth,
    ) -> Result<(), GridError> {
        self.cell_mut(x, y)?.add_rule(pattern, growth);
        Ok(())
    }

    /// A shared handle to the rule table of the cell at `(x, y)`.
    pub fn rules_handle(&self, x: usize, y: usize) -> Result<RuleHandle, GridError> {
        Ok(self.cell(x, y)?.rules_handle())
    }

    /// The 3×3 neighborhood of `(x, y)`, row-major (NW..SE, center at
    /// index 4), wrapping toroidally at the edges.
    ///
    /// `(x, y)` itself must be in bounds.
    pub fn neighborhood(&self, x: usize, y: usize) -> Result<Neighborhood, GridError> {
        self.check(x, y)?;
        Ok(self.window(x, y))
    }

    /// In-bounds neighborhood read with toroidal wrap.
    fn window(&self, x: usize, y: usize) -> Neighborhood {
        let width = self.width as isize;
        let height = self.height as isize;
        let symbols = std::array::from_fn(|i| {
            let dx = (i % 3) as isize - 1;
            let dy = (i / 3) as isize - 1;
            let nx = (x as isize + dx).rem_euclid(width) as usize;
            let ny = (y as isize + dy).rem_euclid(height) as usize;
            self.cells[ny][nx].state().clone()
        });
        Neighborhood::new(symbols)
    }

    /// Inserts a new cell at the target, shifting toward a boundary.
    ///
    /// The new cell shares the target cell's current rule table.
    /// `Direction::Center` is a point write of `state` into the target.
    /// For the compass directions, every cell strictly between the target
    /// and the boundary opposite the direction shifts one step toward it,
    /// the boundary-most cell is discarded, and the new cell lands
    /// immediately adjacent to the target on the direction's side. An
    /// insertion pointing at the grid edge (`North` at `y = 0`, `West` at
    /// `x = 0`, and their mirrors) discards the new cell instead: a no-op.
    pub fn insert(
        &mut self,
        x: usize,
        y: usize,
        direction: Direction,
        state: impl Into<Symbol>,
    ) -> Result<(), GridError> {
        self.check(x, y)?;
        self.insert_at(x, y, direction, state.into());
        Ok(())
    }

    /// In-bounds insertion. One atomic row/column rewrite or point write.
    fn insert_at(&mut self, x: usize, y: usize, direction: Direction, state: Symbol) {
        match direction {
            Direction::Center => self.cells[y][x].set_state(state),
            Direction::West => {
                let cell = self.spawn(x, y, state);
                let row = &mut self.cells[y];
                row.insert(x, cell);
                row.remove(0);
            }
            Direction::East => {
                let cell = self.spawn(x, y, state);
                let width = self.width;
                let row = &mut self.cells[y];
                row.insert(x + 1, cell);
                row.truncate(width);
            }
            Direction::North => {
                let cell = self.spawn(x, y, state);
                let mut column = self.column(x);
                column.insert(y, cell);
                column.remove(0);
                self.write_column(x, column);
            }
            Direction::South => {
                let cell = self.spawn(x, y, state);
                let mut column = self.column(x);
                column.insert(y + 1, cell);
                column.truncate(self.height);
                self.write_column(x, column);
            }
        }
    }

    /// A new cell sharing the rule table of the cell at `(x, y)`.
    fn spawn(&self, x: usize, y: usize, state: Symbol) -> Cell {
        Cell::with_shared_rules(state, self.cells[y][x].rules_handle())
    }

    fn column(&self, x: usize) -> Vec<Cell> {
        self.cells.iter().map(|row| row[x].clone()).collect()
    }

    fn write_column(&mut self, x: usize, column: Vec<Cell>) {
        for (row, moved) in self.cells.iter_mut().zip(column) {
            row[x] = moved;
        }
    }

    /// Cells in the clamped half-open region whose rule table is
    /// non-empty, in raster order (increasing y, then x).
    fn region_targets(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Vec<(usize, usize)> {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);

        let mut targets = Vec::new();
        for y in y0..y1 {
            for x in x0..x1 {
                if !self.cells[y][x].rules().is_empty() {
                    targets.push((x, y));
                }
            }
        }
        targets
    }

    /// Updates every rule-bearing cell in the half-open region
    /// `x0 <= x < x1`, `y0 <= y < y1` (clamped to the grid).
    ///
    /// Cells are processed in raster order, and each one reads its
    /// neighborhood fresh from the grid at its own turn, so later cells
    /// observe the mutations earlier cells made within the same pass.
    /// This is not a synchronous generation step; see
    /// [`update_region_buffered`](Self::update_region_buffered) for one.
    pub fn update_region(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        for (x, y) in self.region_targets(x0, y0, x1, y1) {
            let key = self.window(x, y);
            let growth = self.cells[y][x].rules().resolve(&key).cloned();
            if let Some(growth) = growth {
                self.apply_growth(x, y, &growth);
            }
        }
    }

    /// Synchronous variant of [`update_region`](Self::update_region):
    /// resolves every rule-bearing cell against the pre-pass grid first,
    /// then applies all resulting insertions in raster order.
    pub fn update_region_buffered(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        let resolved: Vec<(usize, usize, Growth)> = self
            .region_targets(x0, y0, x1, y1)
            .into_iter()
            .filter_map(|(x, y)| {
                let key = self.window(x, y);
                let growth = self.cells[y][x].rules().resolve(&key).cloned();
                growth.map(|g| (x, y, g))
            })
            .collect();

        for (x, y, growth) in resolved {
            self.apply_growth(x, y, &growth);
        }
    }

    /// Updates the whole grid; shorthand for a full-region
    /// [`update_region`](Self::update_region).
    pub fn update(&mut self) {
        self.update_region(0, 0, self.width, self.height);
    }

    /// Applies a resolved result vector, one insertion per present entry,
    /// in result-vector order (north, west, center, east, south).
    fn apply_growth(&mut self, x: usize, y: usize, growth: &Growth) {
        for (direction, state) in growth.iter() {
            self.insert_at(x, y, direction, state.clone());
        }
    }

    /// Resets every cell's state to the empty symbol. Rule tables are
    /// left untouched.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.set_state(Symbol::empty());
            }
        }
    }

    /// Counts the cells currently holding the given state.
    pub fn count_state(&self, state: &Symbol) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.state() == state)
            .count()
    }
}
