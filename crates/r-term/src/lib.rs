// SPDX-License-Identifier: MIT
//
// r-term — terminal layer for rogue-term.
//
// Raw termios for byte-at-a-time input, ANSI escape sequences for cursor
// placement and clearing, and a buffered screen that sends each frame in one
// write. No TUI framework sits in between; every byte sent to the terminal is
// one we chose to send.

pub mod ansi;
pub mod error;
pub mod output;
pub mod reader;
pub mod screen;
pub mod terminal;

pub use error::{Error, Result};
pub use reader::{ByteKeys, KeySource, StdinKeys};
pub use screen::Screen;
pub use terminal::Terminal;
