// SPDX-License-Identifier: MIT
//! The `Render` capability.
//!
//! Anything that can put glyphs on screen implements [`Render`] by calling
//! a draw callback with zero-based screen coordinates and a glyph. The
//! callback decides where those glyphs go: a [`Screen`] in the game, a
//! `Vec` in tests.

use std::io::{self, Write};

use r_term::Screen;

/// Draw callback: `(screen_x, screen_y, glyph)`.
pub type DrawFn<'a> = dyn FnMut(u16, u16, &str) -> io::Result<()> + 'a;

/// Something that draws itself as positioned glyphs.
pub trait Render {
    /// Emit every glyph of `self` through `draw`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from `draw`.
    fn render(&self, draw: &mut DrawFn<'_>) -> io::Result<()>;
}

/// Render `item` onto `screen`.
///
/// # Errors
///
/// Propagates screen write errors.
pub fn draw_on<W: Write>(screen: &mut Screen<W>, item: &dyn Render) -> io::Result<()> {
    item.render(&mut |x, y, glyph| screen.draw_text(x, y, glyph))
}

/// Collect every draw call `item` makes, in order.
#[must_use]
pub fn collect(item: &dyn Render) -> Vec<(u16, u16, String)> {
    let mut calls = Vec::new();
    let _ = item.render(&mut |x, y, glyph| {
        calls.push((x, y, glyph.to_owned()));
        Ok(())
    });
    calls
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair;

    impl Render for Pair {
        fn render(&self, draw: &mut DrawFn<'_>) -> io::Result<()> {
            draw(0, 0, "a")?;
            draw(2, 1, "b")
        }
    }

    struct Failing;

    impl Render for Failing {
        fn render(&self, draw: &mut DrawFn<'_>) -> io::Result<()> {
            draw(0, 0, "x")?;
            Err(io::Error::other("stop"))
        }
    }

    #[test]
    fn collect_records_calls_in_order() {
        assert_eq!(
            collect(&Pair),
            vec![(0, 0, "a".to_owned()), (2, 1, "b".to_owned())]
        );
    }

    #[test]
    fn collect_keeps_calls_made_before_an_error() {
        assert_eq!(collect(&Failing), vec![(0, 0, "x".to_owned())]);
    }

    #[test]
    fn draw_on_writes_positioned_text() {
        let mut screen = Screen::new(Vec::new());
        draw_on(&mut screen, &Pair).unwrap();
        assert_eq!(screen.pending(), b"\x1b[1;1Ha\x1b[2;3Hb");
    }

    #[test]
    fn draw_on_propagates_errors() {
        let mut screen = Screen::new(Vec::new());
        assert!(draw_on(&mut screen, &Failing).is_err());
    }
}
