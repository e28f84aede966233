// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Key input — one raw byte per read.
//
// Keys are delivered exactly as the terminal sends them. There is no
// escape-sequence decoding: an arrow key arrives as `ESC`, `[`, `A` over
// three calls, and each byte is an independent key as far as callers are
// concerned.
//
// `StdinKeys` reads file descriptor 0 directly with `read(2)`, one byte at
// a time, so nothing sits in a userspace buffer between the terminal and
// the game. `ByteKeys` adapts any `io::Read`; tests feed it byte slices.

use std::io::{self, Read};

/// A blocking source of single key bytes.
pub trait KeySource {
    /// Block until one byte is available and return it.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_key(&mut self) -> io::Result<Option<u8>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> io::Result<Option<u8>> {
        (**self).read_key()
    }
}

// ─── Stdin ──────────────────────────────────────────────────────────────────

/// Unbuffered key reader on the process's stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinKeys;

impl StdinKeys {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl KeySource for StdinKeys {
    fn read_key(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        loop {
            let n = unsafe { libc::read(libc::STDIN_FILENO, (&raw mut byte).cast(), 1) };
            match n {
                1 => return Ok(Some(byte)),
                0 => return Ok(None),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err);
                    }
                }
            }
        }
    }
}

#[cfg(not(unix))]
impl KeySource for StdinKeys {
    fn read_key(&mut self) -> io::Result<Option<u8>> {
        ByteKeys::new(io::stdin().lock()).read_key()
    }
}

// ─── Any Reader ─────────────────────────────────────────────────────────────

/// Key reader over any [`Read`] implementation.
///
/// ```
/// use r_term::reader::{ByteKeys, KeySource};
///
/// let mut keys = ByteKeys::new(&b"w\x1b"[..]);
/// assert_eq!(keys.read_key()?, Some(b'w'));
/// assert_eq!(keys.read_key()?, Some(0x1b));
/// assert_eq!(keys.read_key()?, None);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ByteKeys<R> {
    inner: R,
}

impl<R: Read> ByteKeys<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> KeySource for ByteKeys<R> {
    fn read_key(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut keys: impl KeySource) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(b) = keys.read_key().unwrap() {
            out.push(b);
        }
        out
    }

    #[test]
    fn bytes_arrive_one_per_call() {
        assert_eq!(drain(ByteKeys::new(&b"wasd"[..])), b"wasd");
    }

    #[test]
    fn arrow_key_is_three_separate_keys() {
        let mut keys = ByteKeys::new(&b"\x1b[A"[..]);
        assert_eq!(keys.read_key().unwrap(), Some(0x1b));
        assert_eq!(keys.read_key().unwrap(), Some(b'['));
        assert_eq!(keys.read_key().unwrap(), Some(b'A'));
        assert_eq!(keys.read_key().unwrap(), None);
    }

    #[test]
    fn full_byte_range_passes_through() {
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(drain(ByteKeys::new(all.as_slice())), all);
    }

    #[test]
    fn empty_input_is_end() {
        let mut keys = ByteKeys::new(io::empty());
        assert_eq!(keys.read_key().unwrap(), None);
        assert_eq!(keys.read_key().unwrap(), None);
    }

    /// Fails with `Interrupted` once, then yields its data.
    struct Flaky {
        interrupted: bool,
        data: &'static [u8],
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn interrupted_read_is_retried() {
        let mut keys = ByteKeys::new(Flaky {
            interrupted: false,
            data: b"s",
        });
        assert_eq!(keys.read_key().unwrap(), Some(b's'));
    }

    #[test]
    fn other_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("gone"))
            }
        }
        assert!(ByteKeys::new(Broken).read_key().is_err());
    }

    #[test]
    fn mut_ref_is_a_key_source() {
        let mut keys = ByteKeys::new(&b"ab"[..]);
        let by_ref = &mut keys;
        assert_eq!(drain(by_ref), b"ab");
    }
}
