// SPDX-License-Identifier: MIT
//! # r-maze — game core for rogue-term
//!
//! - **[`position`]** — `Position` (x, y) and `Direction`, 0-indexed
//! - **[`cell`]** — `Cell` (wall or open) and its glyph
//! - **[`grid`]** — `MazeGrid`: random obstacle field with move validation
//! - **[`player`]** — `Player`: position plus wall-checked movement
//! - **[`render`]** — the `Render` capability shared by grid and player
//! - **[`config`]** — compiled-in viewport, wall odds, spawn, glyph
//! - **[`controller`]** — the draw / read key / dispatch loop

pub mod cell;
pub mod config;
pub mod controller;
pub mod grid;
pub mod player;
pub mod position;
pub mod render;

pub use config::Config;
pub use controller::{Controller, State, StopReason, Summary};
