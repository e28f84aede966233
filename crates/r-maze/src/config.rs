// SPDX-License-Identifier: MIT
//! Compiled-in game configuration.
//!
//! The viewport is fixed: the game does not query or follow the terminal
//! size. Layout, top to bottom:
//!
//! ```text
//!   row 0            +------ ... ------+   border
//!   rows 1..h-1      |   maze grid     |   (h - 2) rows × (w - 2) columns
//!   row h-1          +------ ... ------+   border
//!   row h            status line
//! ```

use unicode_width::UnicodeWidthStr;

use crate::position::Position;

/// Viewport width in columns, border included.
pub const VIEWPORT_WIDTH: u16 = 80;

/// Viewport height in rows, border included.
pub const VIEWPORT_HEIGHT: u16 = 25;

/// Chance that any given cell is generated as a wall (1 in 10).
pub const WALL_PROBABILITY: f64 = 0.1;

/// Where the player starts, in grid coordinates.
pub const PLAYER_SPAWN: Position = Position::new(10, 10);

/// Player glyph.
pub const PLAYER_GLYPH: &str = "@";

/// Game configuration. The binary always runs with [`Config::default`];
/// tests build smaller ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Viewport width including the border. At least 3.
    pub width: u16,
    /// Viewport height including the border. At least 3.
    pub height: u16,
    /// Per-cell wall probability in `0.0..=1.0`.
    pub wall_probability: f64,
    /// Player start position in grid coordinates.
    pub spawn: Position,
    /// Glyph drawn for the player. Must be one terminal column wide.
    pub player_glyph: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            wall_probability: WALL_PROBABILITY,
            spawn: PLAYER_SPAWN,
            player_glyph: PLAYER_GLYPH,
        }
    }
}

impl Config {
    /// Grid rows: the viewport minus the top and bottom border.
    #[inline]
    #[must_use]
    pub fn grid_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(2))
    }

    /// Grid columns: the viewport minus the left and right border.
    #[inline]
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        usize::from(self.width.saturating_sub(2))
    }

    /// Screen row of the status line, directly below the border.
    #[inline]
    #[must_use]
    pub const fn status_row(&self) -> u16 {
        self.height
    }

    /// The spawn position pulled onto the grid if it lies outside.
    #[must_use]
    pub fn spawn_on_grid(&self) -> Position {
        let max_x = i32::try_from(self.grid_columns()).unwrap_or(i32::MAX) - 1;
        let max_y = i32::try_from(self.grid_rows()).unwrap_or(i32::MAX) - 1;
        let clamped = Position::new(
            self.spawn.x.clamp(0, max_x.max(0)),
            self.spawn.y.clamp(0, max_y.max(0)),
        );
        if clamped != self.spawn {
            log::warn!("spawn {} is off the grid; using {}", self.spawn, clamped);
        }
        clamped
    }

    /// The player glyph if it is exactly one column wide, otherwise
    /// [`PLAYER_GLYPH`]. Wide glyphs (most emoji) would push the rest of the
    /// row one column right and break the grid alignment.
    #[must_use]
    pub fn player_glyph(&self) -> &'static str {
        if self.player_glyph.width() == 1 {
            self.player_glyph
        } else {
            log::warn!(
                "player glyph {:?} is {} columns wide; using {PLAYER_GLYPH:?}",
                self.player_glyph,
                self.player_glyph.width()
            );
            PLAYER_GLYPH
        }
    }
}
