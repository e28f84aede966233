// SPDX-License-Identifier: MIT
//! The player.

use std::io;

use crate::grid::MazeGrid;
use crate::position::{Direction, Position};
use crate::render::{DrawFn, Render};

/// The player: a position and the glyph drawn there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    glyph: &'static str,
}

impl Player {
    #[must_use]
    pub const fn new(position: Position, glyph: &'static str) -> Self {
        Self { position, glyph }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Move by `(dx, dy)` if the target cell is open and on the grid.
    ///
    /// Returns whether the player moved. A blocked move leaves the position
    /// untouched; it is ordinary play, not an error.
    pub fn attempt_move(&mut self, dx: i32, dy: i32, grid: &MazeGrid) -> bool {
        let candidate = self.position.offset(dx, dy);
        if grid.is_move_valid(candidate) {
            self.position = candidate;
            true
        } else {
            false
        }
    }

    /// [`attempt_move`](Self::attempt_move) one step in `dir`.
    pub fn step(&mut self, dir: Direction, grid: &MazeGrid) -> bool {
        let (dx, dy) = dir.delta();
        self.attempt_move(dx, dy, grid)
    }
}

impl Render for Player {
    fn render(&self, draw: &mut DrawFn<'_>) -> io::Result<()> {
        match self.position.to_screen() {
            Some((x, y)) => draw(x, y, self.glyph),
            None => Ok(()),
        }
    }
}
