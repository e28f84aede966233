// SPDX-License-Identifier: MIT
//
// Terminal control — raw mode with RAII restore.
//
// Safety: This module necessarily uses `unsafe` for termios (tcgetattr,
// tcsetattr) and isatty. These are the standard POSIX interfaces for
// terminal control; there is no safe alternative in std. Each unsafe block
// is one libc call.
#![allow(unsafe_code)]
//
// The game wants exactly one thing from the terminal: every keypress
// delivered immediately as a byte, without the key being echoed. That is
// canonical mode and echo switched off, with VMIN=1/VTIME=0 so a blocking
// read returns as soon as one byte exists. Output processing and signals
// are left alone, so `\n` still works and Ctrl-C still interrupts.
//
// The original attributes are captured once, owned by the `Terminal`
// handle, and restored on `restore_mode()` or on drop, whichever comes
// first. A panic hook restores them from a global backup as well, so a
// crash never leaves the user's shell without echo.

#[cfg(unix)]
use std::sync::Mutex;
use std::sync::Once;

use crate::error::{Error, Result};

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Check whether stdin is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Panic-Safe Restore ─────────────────────────────────────────────────────

/// Global backup of the original termios for the panic hook.
///
/// The [`Terminal`] owns its own copy; the hook cannot reach it, so the
/// snapshot is mirrored here behind a [`Mutex`].
#[cfg(unix)]
static TERMIOS_BACKUP: Mutex<Option<libc::termios>> = Mutex::new(None);

/// Ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore termios from the global backup. Best-effort, ignores errors.
#[cfg(unix)]
fn restore_termios_from_backup() {
    if let Ok(guard) = TERMIOS_BACKUP.lock() {
        if let Some(ref original) = *guard {
            unsafe {
                let _ = libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, original);
            }
        }
    }
}

#[cfg(not(unix))]
fn restore_termios_from_backup() {}

/// Install a panic hook that puts the terminal back before the panic
/// message prints, then delegates to the previous hook.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_termios_from_backup();
            original(info);
        }));
    });
}

// ─── Terminal ───────────────────────────────────────────────────────────────

/// Raw-mode guard for the controlling terminal.
///
/// # Example
///
/// ```no_run
/// use r_term::terminal::Terminal;
///
/// let mut term = Terminal::new();
/// term.enter_raw_mode()?;
/// // ... read keys, draw frames ...
/// term.restore_mode()?; // or just drop `term`
/// # Ok::<(), r_term::Error>(())
/// ```
pub struct Terminal {
    /// Attributes captured by the last successful `enter_raw_mode`.
    #[cfg(unix)]
    original_termios: Option<libc::termios>,

    /// Whether raw mode is currently applied.
    raw: bool,
}

impl Terminal {
    /// Create a handle. Does **not** touch the terminal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            #[cfg(unix)]
            original_termios: None,
            raw: false,
        }
    }

    /// Whether raw mode is currently applied by this handle.
    #[inline]
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        self.raw
    }

    /// Switch stdin to unbuffered, non-echoing, byte-at-a-time input.
    ///
    /// Captures the current attributes first so [`restore_mode`] can put
    /// them back. No-op if raw mode is already on, or if stdin is not a
    /// terminal (input then arrives however the pipe delivers it).
    ///
    /// # Errors
    ///
    /// [`Error::GetAttributes`] if the current mode cannot be read,
    /// [`Error::SetAttributes`] if the raw mode cannot be applied.
    ///
    /// [`restore_mode`]: Self::restore_mode
    #[cfg(unix)]
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        if self.raw {
            return Ok(());
        }
        if !is_tty() {
            log::debug!("stdin is not a tty; leaving terminal mode unchanged");
            return Ok(());
        }

        install_panic_hook();

        let fd = libc::STDIN_FILENO;
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &raw mut termios) != 0 {
                return Err(Error::GetAttributes(std::io::Error::last_os_error()));
            }

            self.original_termios = Some(termios);
            if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
                *guard = Some(termios);
            }

            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            // VMIN=1, VTIME=0: read() blocks until at least 1 byte is available.
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;

            if libc::tcsetattr(fd, libc::TCSANOW, &raw const termios) != 0 {
                return Err(Error::SetAttributes(std::io::Error::last_os_error()));
            }
        }

        self.raw = true;
        log::debug!("raw mode on");
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        install_panic_hook();
        Ok(())
    }

    /// Reapply the attributes captured by [`enter_raw_mode`].
    ///
    /// Idempotent: calling it again, or without ever entering raw mode, is
    /// a no-op. Pending unread input is discarded (`TCSAFLUSH`) so stray
    /// key bytes do not leak into the parent shell.
    ///
    /// # Errors
    ///
    /// [`Error::SetAttributes`] if the saved mode cannot be applied. The
    /// snapshot is kept so a later call (or drop) can try again.
    ///
    /// [`enter_raw_mode`]: Self::enter_raw_mode
    #[cfg(unix)]
    pub fn restore_mode(&mut self) -> Result<()> {
        let Some(ref original) = self.original_termios else {
            return Ok(());
        };

        unsafe {
            if libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, original) != 0 {
                return Err(Error::SetAttributes(std::io::Error::last_os_error()));
            }
        }

        if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
            *guard = None;
        }
        self.original_termios = None;
        self.raw = false;
        log::debug!("terminal mode restored");
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn restore_mode(&mut self) -> Result<()> {
        self.raw = false;
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore_mode() {
            log::error!("failed to restore terminal on drop: {e}");
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
