// SPDX-License-Identifier: MIT
//
// rogue-term — walk a glyph around a random field of walls.
//
// This binary wires the two crates together:
//
//   r-term → raw termios, single-byte key reads, buffered ANSI screen
//   r-maze → grid, player, and the draw / read / dispatch loop
//
// Layout (fixed 80×25 viewport plus one status row):
//
//   +------------------------------+
//   | maze grid, player `@`        |  ← 23 rows × 78 columns
//   +------------------------------+
//   status line                       ← row 25, cursor parks here
//
// Keys: w/a/s/d move, space quits, any other byte also quits.
//
// Terminal mode is held by a `Terminal` guard for exactly the span of the
// game loop. It is restored explicitly after the loop and again (no-op) on
// drop, so every exit path, including errors and panics, gives the shell its
// terminal back.

use std::process;

use log::info;

use r_maze::{Config, Controller};
use r_term::{Screen, StdinKeys, Terminal};

fn run() -> r_term::Result<()> {
    let mut terminal = Terminal::new();
    terminal.enter_raw_mode()?;

    let mut game = Controller::new(Config::default());
    let mut screen = Screen::stdout();
    let outcome = game.run(&mut screen, &mut StdinKeys::new());

    terminal.restore_mode()?;
    let summary = outcome?;

    info!(
        "stopped ({:?}) after {} keys, {} moves, {} blocked",
        summary.stop, summary.keys, summary.moves, summary.blocked
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("rogue-term: {e}");
        process::exit(1);
    }
}
