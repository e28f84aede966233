// SPDX-License-Identifier: MIT
//
// Screen renderer — positioned text and boxes over a buffered sink.
//
// Every drawing call appends to an `OutputBuffer`; nothing reaches the sink
// until `flush()`. Cursor moves and text share that one buffer, so text
// written after a move always lands at the moved-to position.
//
// Coordinates are 0-indexed columns (`x`) and rows (`y`). Conversion to the
// terminal's 1-based protocol happens in `ansi::cursor_to` and nowhere else.

use std::io::{self, Write};

use crate::ansi;
use crate::output::OutputBuffer;

/// Box corner glyph.
pub const BOX_CORNER: char = '+';
/// Box horizontal edge glyph.
pub const BOX_HORIZONTAL: char = '-';
/// Box vertical edge glyph.
pub const BOX_VERTICAL: char = '|';

/// A buffered ANSI screen writing to `W` (stdout in the binary, a
/// `Vec<u8>` in tests).
pub struct Screen<W: Write> {
    out: OutputBuffer,
    sink: W,
}

impl Screen<io::Stdout> {
    /// A screen that flushes to the process's stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    /// Wrap a sink. Nothing is written until the first [`flush`](Self::flush).
    pub fn new(sink: W) -> Self {
        Self {
            out: OutputBuffer::new(),
            sink,
        }
    }

    /// Clear all visible terminal content.
    ///
    /// # Errors
    ///
    /// Propagates buffer write errors (none in practice).
    pub fn clear_screen(&mut self) -> io::Result<()> {
        ansi::clear_screen(&mut self.out)
    }

    /// Move the cursor to the 0-indexed cell `(x, y)`.
    ///
    /// # Errors
    ///
    /// Propagates buffer write errors (none in practice).
    pub fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        ansi::cursor_to(&mut self.out, x, y)
    }

    /// Move to `(x, y)` and write `text` verbatim. No wrapping, no clipping.
    ///
    /// # Errors
    ///
    /// Propagates buffer write errors (none in practice).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.move_cursor(x, y)?;
        self.out.write_all(text.as_bytes())
    }

    /// Draw a `width × height` outline with its top-left corner at `(x, y)`.
    ///
    /// Corners are `+`, horizontal edges `-`, vertical edges `|`, and the
    /// interior is blanked with spaces. Both dimensions must be at least 2.
    ///
    /// # Errors
    ///
    /// Propagates buffer write errors (none in practice).
    pub fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> io::Result<()> {
        debug_assert!(width >= 2 && height >= 2, "box must be at least 2×2");

        let inner = usize::from(width.saturating_sub(2));
        let edge = format!(
            "{BOX_CORNER}{}{BOX_CORNER}",
            BOX_HORIZONTAL.to_string().repeat(inner)
        );
        let middle = format!("{BOX_VERTICAL}{}{BOX_VERTICAL}", " ".repeat(inner));

        self.draw_text(x, y, &edge)?;
        for row in 1..height.saturating_sub(1) {
            self.draw_text(x, y.saturating_add(row), &middle)?;
        }
        self.draw_text(x, y.saturating_add(height.saturating_sub(1)), &edge)
    }

    /// Bytes drawn since the last flush.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        self.out.as_bytes()
    }

    /// Write the pending frame to the sink in one write and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to write or flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush_to(&mut self.sink)
    }

    /// The sink, for inspecting what has been flushed.
    #[inline]
    #[must_use]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the screen and return the sink. Unflushed output is dropped.
    #[must_use]
    pub fn into_sink(self) -> W {
        self.sink
    }
}
