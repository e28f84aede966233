// SPDX-License-Identifier: MIT
//! Grid positions and movement directions.
//!
//! All coordinates are **0-indexed**: `x` is the column, `y` the row, and
//! `(0, 0)` is the top-left grid cell. They are signed so a candidate move
//! off the top or left edge is representable and can be rejected by the
//! grid instead of wrapping.
//!
//! The grid is drawn one cell inside the border box, so screen placement is
//! `(x + 1, y + 1)`. The 1-based terminal protocol is `r_term::ansi`'s
//! business and never appears here.

use std::fmt;

/// A cell position on the maze grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The top-left grid cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`. Saturates instead of overflowing.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Zero-based screen cell for this grid position, accounting for the
    /// border. `None` if the position cannot be on screen.
    #[must_use]
    pub fn to_screen(self) -> Option<(u16, u16)> {
        let sx = u16::try_from(self.x.checked_add(1)?).ok()?;
        let sy = u16::try_from(self.y.checked_add(1)?).ok()?;
        Some((sx, sy))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` for one step. Rows grow downward, so `Up` is `y - 1`.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
