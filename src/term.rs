// Terminal color emitter
//
// Recolors the hosting terminal itself (not the host's internal renderer)
// by writing OSC sequences to the output stream:
//
//   ESC ] 11 ; #rrggbb BEL   set default background
//   ESC ] 10 ; #rrggbb BEL   set default foreground
//   ESC ] 111 BEL            reset background to the terminal's own default
//   ESC ] 110 BEL            reset foreground to the terminal's own default
//
// All writes are best-effort and flushed immediately. Failures are swallowed:
// these are cosmetic writes that also run during process teardown, where a
// closed stream must not turn into a panic or an error return.

use crate::theme::TerminalPalette;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Emits terminal color control sequences to a shared writer.
///
/// The writer is shared (`Rc<RefCell<_>>`) so the toggle, the startup path,
/// and the exit guard all target the same stream. The theming layer is
/// single-threaded and callback-driven, so `Rc` is sufficient.
pub struct TerminalColors<W: Write> {
    out: Rc<RefCell<W>>,
}

impl<W: Write> Clone for TerminalColors<W> {
    fn clone(&self) -> Self {
        Self {
            out: Rc::clone(&self.out),
        }
    }
}

impl TerminalColors<io::Stdout> {
    /// Emitter targeting the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalColors<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
        }
    }

    /// The shared writer, for callers that print through the same stream
    /// (e.g. the toggle's confirmation message)
    pub fn writer(&self) -> Rc<RefCell<W>> {
        Rc::clone(&self.out)
    }

    /// Set the terminal's default background and foreground to the palette
    pub fn apply(&self, palette: &TerminalPalette) {
        let mut out = self.out.borrow_mut();
        let _ = write!(out, "\x1b]11;{}\x07", palette.bg_hex());
        let _ = write!(out, "\x1b]10;{}\x07", palette.fg_hex());
        let _ = out.flush();
    }

    /// Restore the terminal's own default colors (no override)
    pub fn reset(&self) {
        let mut out = self.out.borrow_mut();
        let _ = write!(out, "\x1b]111\x07");
        let _ = write!(out, "\x1b]110\x07");
        let _ = out.flush();
    }
}

/// Scoped terminal color override.
///
/// Holding the guard means "the terminal palette is ours"; releasing it
/// (explicitly or on drop) emits the reset sequences exactly once, so the
/// user's terminal is never left recolored after a normal exit. Abnormal
/// termination (SIGKILL) skips destructors - an accepted limitation, no
/// signal handlers are installed.
pub struct TermColorGuard<W: Write> {
    colors: TerminalColors<W>,
    armed: bool,
}

impl<W: Write> TermColorGuard<W> {
    pub fn new(colors: TerminalColors<W>) -> Self {
        Self {
            colors,
            armed: true,
        }
    }

    /// Reset the terminal now instead of waiting for drop
    pub fn release(&mut self) {
        if self.armed {
            self.colors.reset();
            self.armed = false;
        }
    }
}

impl<W: Write> Drop for TermColorGuard<W> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeId};

    fn capture() -> (TerminalColors<Vec<u8>>, Rc<RefCell<Vec<u8>>>) {
        let colors = TerminalColors::new(Vec::new());
        let buf = colors.writer();
        (colors, buf)
    }

    #[test]
    fn test_apply_writes_osc_11_then_10() {
        let (colors, buf) = capture();
        colors.apply(&Theme::bundled(ThemeId::OneDark).palette);

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]11;#282c34\x07\x1b]10;#abb2bf\x07");
    }

    #[test]
    fn test_apply_papercolor_palette() {
        let (colors, buf) = capture();
        colors.apply(&Theme::bundled(ThemeId::PaperColor).palette);

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]11;#eeeeee\x07\x1b]10;#444444\x07");
    }

    #[test]
    fn test_reset_writes_exactly_the_two_reset_sequences() {
        let (colors, buf) = capture();
        colors.reset();

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]111\x07\x1b]110\x07");
    }

    #[test]
    fn test_guard_resets_on_drop() {
        let (colors, buf) = capture();
        {
            let _guard = TermColorGuard::new(colors);
        }
        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]111\x07\x1b]110\x07");
    }

    #[test]
    fn test_guard_resets_at_most_once() {
        let (colors, buf) = capture();
        {
            let mut guard = TermColorGuard::new(colors);
            guard.release();
            guard.release();
            // drop fires here as well
        }
        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]111\x07\x1b]110\x07");
    }
}
