// SPDX-License-Identifier: MIT
//
// Terminal-control errors.
//
// Reading or applying termios attributes is the one failure the game cannot
// recover from: without raw mode there is no single-key input. These get
// their own variants so the binary can report exactly which call failed.

use std::io;

use thiserror::Error;

/// Terminal control error.
#[derive(Error, Debug)]
pub enum Error {
    /// `tcgetattr` failed while capturing the original terminal mode.
    #[error("cannot read terminal attributes: {0}")]
    GetAttributes(#[source] io::Error),

    /// `tcsetattr` failed while entering or leaving raw mode.
    #[error("cannot set terminal attributes: {0}")]
    SetAttributes(#[source] io::Error),

    /// Any other I/O failure on the terminal streams.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal control.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_call() {
        let err = Error::GetAttributes(io::Error::from_raw_os_error(25));
        assert!(err.to_string().starts_with("cannot read terminal attributes"));

        let err = Error::SetAttributes(io::Error::other("boom"));
        assert_eq!(err.to_string(), "cannot set terminal attributes: boom");
    }

    #[test]
    fn io_errors_convert() {
        fn fails() -> Result<()> {
            Err(io::Error::other("closed"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Io(_))));
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;
        let err = Error::SetAttributes(io::Error::other("inner"));
        assert_eq!(err.source().unwrap().to_string(), "inner");
    }
}
