// Theme toggle state machine
//
// Two states, one transition: each invocation flips to the other theme and
// synchronizes all three color surfaces before returning - the host's UI
// scheme, the companion code/syntax scheme, and the raw terminal palette.
// Both branches are unconditionally valid; toggling twice restores the
// exact original state, terminal colors included.

use crate::session::ReplSession;
use crate::term::TerminalColors;
use crate::theme::{TerminalPalette, Theme, ThemeId};
use std::io::Write;

pub struct ThemeToggle<W: Write> {
    current: ThemeId,
    dark_palette: TerminalPalette,
    light_palette: TerminalPalette,
    colors: TerminalColors<W>,
}

impl<W: Write> ThemeToggle<W> {
    /// Toggle starting from the default theme, with palettes taken from the
    /// given resolved themes
    pub fn new(dark: &Theme, light: &Theme, colors: TerminalColors<W>) -> Self {
        Self {
            current: ThemeId::default(),
            dark_palette: dark.palette,
            light_palette: light.palette,
            colors,
        }
    }

    /// The theme currently applied
    pub fn current(&self) -> ThemeId {
        self.current
    }

    fn palette_for(&self, id: ThemeId) -> &TerminalPalette {
        match id {
            ThemeId::OneDark => &self.dark_palette,
            ThemeId::PaperColor => &self.light_palette,
        }
    }

    /// Flip to the other theme and apply it everywhere.
    ///
    /// Runs synchronously on the host's event thread; every side effect
    /// completes before this returns, so no observer ever sees the three
    /// color surfaces disagree.
    pub fn toggle(&mut self, session: &mut dyn ReplSession) {
        let next = self.current.flipped();
        self.current = next;

        session.use_ui_color_scheme(next.ui_scheme_id());
        session.use_code_color_scheme(next.code_scheme_id());
        self.colors.apply(self.palette_for(next));

        // Confirmation goes through the same stream as the color writes
        {
            let out = self.colors.writer();
            let mut out = out.borrow_mut();
            let _ = writeln!(out, "{} Switched to {} theme", next.icon(), next.display_name());
            let _ = out.flush();
        }

        tracing::debug!(theme = next.display_name(), "theme toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::RecordingSession;

    fn toggle_with_capture() -> (ThemeToggle<Vec<u8>>, std::rc::Rc<std::cell::RefCell<Vec<u8>>>) {
        let colors = TerminalColors::new(Vec::new());
        let buf = colors.writer();
        let dark = Theme::bundled(ThemeId::OneDark);
        let light = Theme::bundled(ThemeId::PaperColor);
        (ThemeToggle::new(&dark, &light, colors), buf)
    }

    #[test]
    fn test_starts_on_onedark() {
        let (toggle, _) = toggle_with_capture();
        assert_eq!(toggle.current(), ThemeId::OneDark);
    }

    #[test]
    fn test_single_toggle_switches_everything_to_papercolor() {
        let (mut toggle, buf) = toggle_with_capture();
        let mut session = RecordingSession::default();

        toggle.toggle(&mut session);

        assert_eq!(toggle.current(), ThemeId::PaperColor);
        assert_eq!(session.active_ui_scheme.as_deref(), Some("papercolor"));
        assert_eq!(session.active_code_scheme.as_deref(), Some("default"));

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert!(written.contains("\x1b]11;#eeeeee\x07"));
        assert!(written.contains("\x1b]10;#444444\x07"));
        assert!(written.contains("PaperColor"));
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let (mut toggle, buf) = toggle_with_capture();
        let mut session = RecordingSession::default();

        toggle.toggle(&mut session);
        buf.borrow_mut().clear();
        toggle.toggle(&mut session);

        assert_eq!(toggle.current(), ThemeId::OneDark);
        assert_eq!(session.active_ui_scheme.as_deref(), Some("onedark"));
        assert_eq!(session.active_code_scheme.as_deref(), Some("monokai"));

        // second toggle re-emits the OneDark palette, so the terminal is
        // back where it started
        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert!(written.contains("\x1b]11;#282c34\x07"));
        assert!(written.contains("\x1b]10;#abb2bf\x07"));
        assert!(written.contains("OneDark"));
    }

    #[test]
    fn test_toggle_activates_ui_scheme_then_code_scheme() {
        let (mut toggle, _) = toggle_with_capture();
        let mut session = RecordingSession::default();

        toggle.toggle(&mut session);

        assert_eq!(
            session.calls,
            vec![
                "use_ui_color_scheme(papercolor)".to_string(),
                "use_code_color_scheme(default)".to_string(),
            ]
        );
    }
}
