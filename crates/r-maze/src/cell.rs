// SPDX-License-Identifier: MIT
//! Maze cells.

/// Semantic state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Wall,
    #[default]
    Open,
}

impl Cell {
    /// Display glyph. Always exactly one terminal column.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wall => "#",
            Self::Open => " ",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Parse map art: `#` is a wall, `.` or space is open.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' | ' ' => Some(Self::Open),
            _ => None,
        }
    }
}
