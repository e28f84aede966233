// SPDX-License-Identifier: MIT
//! The main loop.
//!
//! Two states, [`State::Running`] and [`State::Stopped`]. Each turn of the
//! loop draws a frame, blocks for one key byte, and dispatches it:
//!
//! | Byte        | Effect                          |
//! |-------------|---------------------------------|
//! | `w`         | move up (row − 1)               |
//! | `s`         | move down (row + 1)             |
//! | `a`         | move left                       |
//! | `d`         | move right                      |
//! | space       | stop                            |
//! | anything else | stop                          |
//!
//! Bytes are not decoded: `ESC` alone (the first byte of an arrow key)
//! stops the game like any other unknown key.
//!
//! Terminal mode is the caller's concern. The binary enters raw mode
//! before [`Controller::run`] and its `Terminal` guard restores the mode
//! after `run` returns, whether it returned `Ok` or `Err`.

use std::io::{self, Write};

use log::{debug, trace};
use rand::Rng;
use r_term::{KeySource, Screen};

use crate::config::Config;
use crate::grid::MazeGrid;
use crate::player::Player;
use crate::position::Direction;
use crate::render::{draw_on, Render};

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// What a key byte asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Map one key byte. Every byte maps to something: unknown keys quit.
    #[must_use]
    pub const fn from_key(key: u8) -> Self {
        match key {
            b'w' => Self::Move(Direction::Up),
            b's' => Self::Move(Direction::Down),
            b'a' => Self::Move(Direction::Left),
            b'd' => Self::Move(Direction::Right),
            _ => Self::Quit,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Space was pressed.
    QuitKey,
    /// Some other unmapped byte arrived.
    UnknownKey(u8),
    /// The key source reached end of input.
    EndOfInput,
}

/// Counters for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Key bytes handled.
    pub keys: u32,
    /// Moves applied.
    pub moves: u32,
    /// Moves refused by a wall or the grid edge.
    pub blocked: u32,
    /// Set once the loop has stopped.
    pub stop: Option<StopReason>,
}

/// Owns the grid and the player and runs the draw/read/dispatch loop.
pub struct Controller {
    config: Config,
    grid: MazeGrid,
    player: Player,
    state: State,
    summary: Summary,
}

impl Controller {
    /// A fresh game on a randomly generated grid.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// A fresh game whose grid comes from `rng`.
    #[must_use]
    pub fn with_rng(config: Config, rng: &mut impl Rng) -> Self {
        let grid = MazeGrid::generate_with(
            rng,
            config.grid_rows(),
            config.grid_columns(),
            config.wall_probability,
        );
        Self::with_grid(config, grid)
    }

    /// A fresh game on `grid`. The spawn cell is cleared so the player
    /// never starts inside a wall.
    #[must_use]
    pub fn with_grid(config: Config, mut grid: MazeGrid) -> Self {
        let spawn = config.spawn_on_grid();
        grid.clear_cell(spawn);
        let player = Player::new(spawn, config.player_glyph());
        debug!(
            "grid {}x{} with {} walls, player at {spawn}",
            grid.columns(),
            grid.rows(),
            grid.walls()
        );
        Self {
            config,
            grid,
            player,
            state: State::Running,
            summary: Summary::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn summary(&self) -> Summary {
        self.summary
    }

    /// Clear the screen and draw the border. Runs once per game; the border
    /// is never redrawn.
    ///
    /// # Errors
    ///
    /// Propagates screen write errors.
    pub fn setup<W: Write>(&self, screen: &mut Screen<W>) -> io::Result<()> {
        screen.clear_screen()?;
        screen.draw_box(0, 0, self.config.width, self.config.height)?;
        screen.flush()
    }

    /// Draw grid, then player, then the status line; park the cursor on the
    /// status line and flush.
    ///
    /// # Errors
    ///
    /// Propagates screen write errors.
    pub fn draw_frame<W: Write>(&self, screen: &mut Screen<W>) -> io::Result<()> {
        let layers: [&dyn Render; 2] = [&self.grid, &self.player];
        for layer in layers {
            draw_on(screen, layer)?;
        }

        let row = self.config.status_row();
        screen.draw_text(0, row, &self.status_line())?;
        screen.move_cursor(0, row)?;
        screen.flush()
    }

    /// Status text, padded to the viewport width so a shorter line fully
    /// overwrites a longer one.
    #[must_use]
    pub fn status_line(&self) -> String {
        let text = format!(
            "pos {}  moves {}  [wasd] move  [space] quit",
            self.player.position(),
            self.summary.moves
        );
        format!("{text:<width$}", width = usize::from(self.config.width))
    }

    /// Dispatch one key byte and return the resulting state.
    ///
    /// Keys arriving after the game stopped are ignored.
    pub fn handle_key(&mut self, key: u8) -> State {
        if self.state == State::Stopped {
            return self.state;
        }
        trace!("key {key:#04x}");
        self.summary.keys += 1;

        match Command::from_key(key) {
            Command::Move(dir) => {
                if self.player.step(dir, &self.grid) {
                    self.summary.moves += 1;
                } else {
                    self.summary.blocked += 1;
                    debug!("{dir:?} from {} blocked", self.player.position());
                }
            }
            Command::Quit if key == b' ' => self.stop(StopReason::QuitKey),
            Command::Quit => self.stop(StopReason::UnknownKey(key)),
        }
        self.state
    }

    fn stop(&mut self, reason: StopReason) {
        debug!("stopping: {reason:?}");
        self.state = State::Stopped;
        self.summary.stop = Some(reason);
    }

    /// Run the game until it stops: setup, then draw, read one key,
    /// dispatch, repeat. End of input stops the game.
    ///
    /// # Errors
    ///
    /// Returns the first screen or key-source error.
    pub fn run<W: Write>(
        &mut self,
        screen: &mut Screen<W>,
        keys: &mut impl KeySource,
    ) -> io::Result<Summary> {
        self.setup(screen)?;
        while self.state == State::Running {
            self.draw_frame(screen)?;
            match keys.read_key()? {
                Some(key) => {
                    self.handle_key(key);
                }
                None => self.stop(StopReason::EndOfInput),
            }
        }
        Ok(self.summary)
    }
}
