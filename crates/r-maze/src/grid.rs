// SPDX-License-Identifier: MIT
//! The maze grid.
//!
//! A fixed `rows × columns` field of [`Cell`]s stored row-major in one flat
//! `Vec` (`y * columns + x`). Dimensions are set at construction and never
//! change.
//!
//! Generation flips an independent biased coin per cell. Nothing guarantees
//! that open cells connect: the result is an obstacle field, not a solvable
//! maze.

use std::io;

use rand::Rng;

use crate::cell::Cell;
use crate::position::Position;
use crate::render::{DrawFn, Render};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// A grid with every cell open.
    #[must_use]
    pub fn open(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Open; rows * columns],
        }
    }

    /// Randomize every cell using the thread-local RNG.
    ///
    /// Each cell is a wall with probability `wall_probability` (clamped to
    /// `0.0..=1.0`), independently of every other cell.
    #[must_use]
    pub fn generate(rows: usize, columns: usize, wall_probability: f64) -> Self {
        Self::generate_with(&mut rand::thread_rng(), rows, columns, wall_probability)
    }

    /// Like [`generate`](Self::generate) with a caller-supplied RNG, so a
    /// seeded `StdRng` reproduces the same grid.
    #[must_use]
    pub fn generate_with(
        rng: &mut impl Rng,
        rows: usize,
        columns: usize,
        wall_probability: f64,
    ) -> Self {
        let p = if wall_probability.is_nan() {
            0.0
        } else {
            wall_probability.clamp(0.0, 1.0)
        };
        let cells = (0..rows * columns)
            .map(|_| if rng.gen_bool(p) { Cell::Wall } else { Cell::Open })
            .collect();
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Build a grid from map art, one string per row: `#` wall, `.` open.
    ///
    /// Returns `None` for ragged rows or unknown characters.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let columns = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            if row.chars().count() != columns {
                return None;
            }
            for ch in row.chars() {
                cells.push(Cell::from_char(ch)?);
            }
        }
        Some(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells (`rows × columns`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of wall cells.
    #[must_use]
    pub fn walls(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// All cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index for `pos`, or `None` when out of bounds.
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.columns && y < self.rows).then(|| y * self.columns + x)
    }

    /// Whether `pos` lies on the grid.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// The cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns `false` when out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True when `pos` is in bounds and open.
    #[inline]
    #[must_use]
    pub fn is_move_valid(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Open))
    }

    /// Force the cell at `pos` open. Returns `false` when out of bounds.
    pub fn clear_cell(&mut self, pos: Position) -> bool {
        self.set(pos, Cell::Open)
    }
}

impl Render for MazeGrid {
    /// One draw per cell, row 0 first, left to right, at the cell's screen
    /// position inside the border.
    fn render(&self, draw: &mut DrawFn<'_>) -> io::Result<()> {
        for (i, cell) in self.cells.iter().enumerate() {
            let pos = Position::new(
                i32::try_from(i % self.columns).unwrap_or(i32::MAX),
                i32::try_from(i / self.columns).unwrap_or(i32::MAX),
            );
            if let Some((x, y)) = pos.to_screen() {
                draw(x, y, cell.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::collect;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // ── Generation ──────────────────────────────────────────────────────

    #[test]
    fn generate_produces_rows_times_columns_cells() {
        for (rows, columns) in [(1, 1), (1, 7), (5, 5), (23, 78), (40, 3)] {
            let grid = MazeGrid::generate(rows, columns, 0.1);
            assert_eq!(grid.len(), rows * columns);
            assert_eq!(grid.rows(), rows);
            assert_eq!(grid.columns(), columns);
            for y in 0..rows {
                for x in 0..columns {
                    let pos = Position::new(x as i32, y as i32);
                    assert!(grid.cell(pos).is_some(), "{pos:?} missing");
                }
            }
        }
    }

    #[test]
    fn probability_zero_is_all_open() {
        let grid = MazeGrid::generate_with(&mut seeded(1), 10, 10, 0.0);
        assert_eq!(grid.walls(), 0);
    }

    #[test]
    fn probability_one_is_all_walls() {
        let grid = MazeGrid::generate_with(&mut seeded(1), 10, 10, 1.0);
        assert_eq!(grid.walls(), 100);
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        assert_eq!(MazeGrid::generate_with(&mut seeded(2), 4, 4, 7.5).walls(), 16);
        assert_eq!(MazeGrid::generate_with(&mut seeded(2), 4, 4, -3.0).walls(), 0);
        assert_eq!(MazeGrid::generate_with(&mut seeded(2), 4, 4, f64::NAN).walls(), 0);
    }

    #[test]
    fn one_in_ten_is_roughly_one_in_ten() {
        let grid = MazeGrid::generate_with(&mut seeded(42), 100, 100, 0.1);
        let walls = grid.walls();
        assert!((700..1300).contains(&walls), "walls = {walls}");
    }

    #[test]
    fn same_seed_same_grid() {
        let a = MazeGrid::generate_with(&mut seeded(7), 23, 78, 0.1);
        let b = MazeGrid::generate_with(&mut seeded(7), 23, 78, 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_grid() {
        let grid = MazeGrid::generate(0, 0, 0.5);
        assert!(grid.is_empty());
        assert!(!grid.is_move_valid(Position::ORIGIN));
    }

    // ── Map art ─────────────────────────────────────────────────────────

    #[test]
    fn from_rows_parses_walls() {
        let grid = MazeGrid::from_rows(&["#..", ".#."]).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 3));
        assert_eq!(grid.cell(Position::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(2, 1)), Some(Cell::Open));
        assert_eq!(grid.walls(), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_or_unknown() {
        assert!(MazeGrid::from_rows(&["...", ".."]).is_none());
        assert!(MazeGrid::from_rows(&["..x"]).is_none());
    }

    // ── Move validity ───────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_is_never_valid() {
        let grid = MazeGrid::open(3, 4);
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(4, 0),
            Position::new(0, 3),
            Position::new(-1, -1),
            Position::new(4, 3),
            Position::new(i32::MIN, i32::MAX),
        ] {
            assert!(!grid.is_move_valid(pos), "{pos:?}");
        }
    }

    #[test]
    fn walls_are_not_valid_open_cells_are() {
        let grid = MazeGrid::from_rows(&[".#", "#."]).unwrap();
        assert!(grid.is_move_valid(Position::new(0, 0)));
        assert!(!grid.is_move_valid(Position::new(1, 0)));
        assert!(!grid.is_move_valid(Position::new(0, 1)));
        assert!(grid.is_move_valid(Position::new(1, 1)));
    }

    #[test]
    fn corners_are_in_bounds() {
        let grid = MazeGrid::open(3, 4);
        assert!(grid.is_move_valid(Position::new(0, 0)));
        assert!(grid.is_move_valid(Position::new(3, 2)));
    }

    // ── Clearing ────────────────────────────────────────────────────────

    #[test]
    fn clear_cell_makes_any_cell_valid() {
        let mut grid = MazeGrid::generate_with(&mut seeded(3), 6, 6, 1.0);
        for y in 0..6 {
            for x in 0..6 {
                let pos = Position::new(x, y);
                assert!(grid.clear_cell(pos));
                assert!(grid.is_move_valid(pos));
            }
        }
        assert_eq!(grid.walls(), 0);
    }

    #[test]
    fn clear_cell_on_open_cell_is_harmless() {
        let mut grid = MazeGrid::open(2, 2);
        assert!(grid.clear_cell(Position::new(1, 1)));
        assert_eq!(grid, MazeGrid::open(2, 2));
    }

    #[test]
    fn clear_cell_out_of_bounds_changes_nothing() {
        let mut grid = MazeGrid::generate_with(&mut seeded(4), 3, 3, 0.5);
        let before = grid.clone();
        assert!(!grid.clear_cell(Position::new(3, 0)));
        assert!(!grid.clear_cell(Position::new(0, -1)));
        assert_eq!(grid, before);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    #[test]
    fn render_is_row_major_inside_border() {
        let grid = MazeGrid::from_rows(&["#.", ".#"]).unwrap();
        assert_eq!(
            collect(&grid),
            vec![
                (1, 1, "#".to_owned()),
                (2, 1, " ".to_owned()),
                (1, 2, " ".to_owned()),
                (2, 2, "#".to_owned()),
            ]
        );
    }

    #[test]
    fn render_visits_every_cell_once() {
        let grid = MazeGrid::generate_with(&mut seeded(5), 23, 78, 0.1);
        let calls = collect(&grid);
        assert_eq!(calls.len(), 23 * 78);
        assert_eq!(calls.iter().filter(|(_, _, g)| g == "#").count(), grid.walls());
        assert_eq!(calls.last().map(|c| (c.0, c.1)), Some((78, 23)));
    }
}
