// Session configurator and the host session contract
//
// The host REPL is an opaque collaborator reached through the ReplSession
// trait. The Configurator runs exactly once at startup: it recolors the
// terminal, arms the exit-time reset guard, hands the host its behavioral
// options, registers both color schemes, activates the startup theme, and
// binds the toggle chord.
//
// Everything here is single-threaded and callback-driven: the configurator
// runs to completion on the thread that will later run the host's input
// loop, and the toggle is invoked synchronously from the host's key
// dispatch. Shared toggle state therefore lives in Rc<RefCell<_>>, no locks.

use crate::config::SessionOptions;
use crate::term::{TermColorGuard, TerminalColors};
use crate::theme::{ColorScheme, Theme, ThemeId};
use crate::toggle::ThemeToggle;
use crossterm::event::{KeyCode, KeyModifiers};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// One key press of a chord. Key identities come from crossterm, the
/// terminal backend shared with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

impl From<crossterm::event::KeyEvent> for KeyPress {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// The chord bound to the theme toggle: Ctrl+T pressed twice
pub const THEME_TOGGLE_CHORD: [KeyPress; 2] = [KeyPress::ctrl('t'), KeyPress::ctrl('t')];

/// Callback invoked by the host when a bound chord matches. The host passes
/// itself back in, so the handler can drive session state without holding a
/// long-lived borrow.
pub type ChordAction = Box<dyn FnMut(&mut dyn ReplSession)>;

/// Capability set required of the host session handle.
///
/// The host owns rendering, completion, and key dispatch; this layer only
/// pushes configuration and theme state into it.
pub trait ReplSession {
    /// Apply the full set of behavioral options in one shot
    fn apply_options(&mut self, options: &SessionOptions);

    /// Make a UI color scheme available under a fixed identifier
    fn register_color_scheme(&mut self, id: &str, scheme: ColorScheme);

    /// Activate a previously registered UI scheme
    fn use_ui_color_scheme(&mut self, id: &str);

    /// Activate a code/syntax highlighting scheme by name
    fn use_code_color_scheme(&mut self, id: &str);

    /// Bind a key chord to an action
    fn bind_key_chord(&mut self, chord: &[KeyPress], action: ChordAction);
}

/// Live theming state returned by the configurator.
///
/// Holds the toggle (shared with the chord handler) and the terminal reset
/// guard; dropping the session restores the terminal's own colors.
pub struct ThemeSession<W: Write> {
    toggle: Rc<RefCell<ThemeToggle<W>>>,
    guard: TermColorGuard<W>,
}

impl<W: Write> ThemeSession<W> {
    pub fn current_theme(&self) -> ThemeId {
        self.toggle.borrow().current()
    }

    /// Reset the terminal palette now instead of on drop
    pub fn release_terminal(&mut self) {
        self.guard.release();
    }
}

/// One-shot session setup.
pub struct Configurator<W: Write> {
    options: SessionOptions,
    colors: TerminalColors<W>,
    themes: Option<(Theme, Theme)>,
}

impl Configurator<io::Stdout> {
    /// Configurator emitting terminal colors to standard output
    pub fn with_stdout(options: SessionOptions) -> Self {
        Self::new(options, TerminalColors::stdout())
    }
}

impl<W: Write + 'static> Configurator<W> {
    pub fn new(options: SessionOptions, colors: TerminalColors<W>) -> Self {
        Self {
            options,
            colors,
            themes: None,
        }
    }

    /// Use pre-resolved themes instead of loading from disk
    pub fn with_themes(mut self, dark: Theme, light: Theme) -> Self {
        self.themes = Some((dark, light));
        self
    }

    /// Configure the host session. Called exactly once at startup, before
    /// the host draws its first prompt.
    pub fn configure(self, session: &mut dyn ReplSession) -> ThemeSession<W> {
        let startup = ThemeId::default();
        let (dark, light) = self
            .themes
            .unwrap_or_else(|| (Theme::load(ThemeId::OneDark), Theme::load(ThemeId::PaperColor)));

        // Recolor the terminal first, so its chrome matches from the first
        // frame the host draws.
        let startup_palette = match startup {
            ThemeId::OneDark => &dark.palette,
            ThemeId::PaperColor => &light.palette,
        };
        self.colors.apply(startup_palette);

        // From here on the palette override is owned by the guard; it is
        // released on every normal exit path.
        let guard = TermColorGuard::new(self.colors.clone());

        session.apply_options(&self.options);

        // Register before activating
        session.register_color_scheme(ThemeId::OneDark.ui_scheme_id(), dark.scheme.clone());
        session.register_color_scheme(ThemeId::PaperColor.ui_scheme_id(), light.scheme.clone());

        // The raw terminal palette above and the host-internal scheme here
        // are independent surfaces; both are set at startup.
        session.use_ui_color_scheme(startup.ui_scheme_id());
        session.use_code_color_scheme(startup.code_scheme_id());

        let toggle = Rc::new(RefCell::new(ThemeToggle::new(
            &dark,
            &light,
            self.colors.clone(),
        )));
        let handler = Rc::clone(&toggle);
        session.bind_key_chord(
            &THEME_TOGGLE_CHORD,
            Box::new(move |s| handler.borrow_mut().toggle(s)),
        );

        tracing::info!(theme = startup.display_name(), "session configured");

        ThemeSession { toggle, guard }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSession;
    use super::*;

    fn configure_captured() -> (
        RecordingSession,
        ThemeSession<Vec<u8>>,
        Rc<RefCell<Vec<u8>>>,
    ) {
        let colors = TerminalColors::new(Vec::new());
        let buf = colors.writer();
        let mut session = RecordingSession::default();
        let theme_session = Configurator::new(SessionOptions::default(), colors)
            .with_themes(
                Theme::bundled(ThemeId::OneDark),
                Theme::bundled(ThemeId::PaperColor),
            )
            .configure(&mut session);
        (session, theme_session, buf)
    }

    #[test]
    fn test_configure_starts_in_onedark() {
        let (session, theme_session, _) = configure_captured();

        assert_eq!(theme_session.current_theme(), ThemeId::OneDark);
        assert_eq!(session.active_ui_scheme.as_deref(), Some("onedark"));
        assert_eq!(session.active_code_scheme.as_deref(), Some("monokai"));
    }

    #[test]
    fn test_configure_emits_default_palette_before_any_input() {
        let (_, _theme_session, buf) = configure_captured();

        // the only terminal writes after a fresh configure are the OneDark
        // palette sequences, in bg-then-fg order
        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]11;#282c34\x07\x1b]10;#abb2bf\x07");
    }

    #[test]
    fn test_configure_call_order() {
        let (session, _theme_session, _) = configure_captured();

        assert_eq!(
            session.calls,
            vec![
                "apply_options".to_string(),
                "register_color_scheme(onedark)".to_string(),
                "register_color_scheme(papercolor)".to_string(),
                "use_ui_color_scheme(onedark)".to_string(),
                "use_code_color_scheme(monokai)".to_string(),
                "bind_key_chord(2 keys)".to_string(),
            ]
        );
    }

    #[test]
    fn test_configure_applies_options_and_schemes() {
        let (session, _theme_session, _) = configure_captured();

        let options = session.applied_options.as_ref().expect("options applied");
        assert_eq!(options, &SessionOptions::default());

        assert_eq!(session.registered_schemes.len(), 2);
        assert_eq!(session.registered_schemes[0].0, "onedark");
        assert_eq!(session.registered_schemes[1].0, "papercolor");
        assert!(!session.registered_schemes[0].1.is_empty());
    }

    #[test]
    fn test_chord_dispatch_toggles_theme() {
        let (mut session, theme_session, buf) = configure_captured();

        assert_eq!(session.bindings[0].0, THEME_TOGGLE_CHORD.to_vec());

        session.dispatch(0);
        assert_eq!(theme_session.current_theme(), ThemeId::PaperColor);
        assert_eq!(session.active_ui_scheme.as_deref(), Some("papercolor"));
        assert_eq!(session.active_code_scheme.as_deref(), Some("default"));
        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert!(written.contains("\x1b]11;#eeeeee\x07"));

        // full round trip
        session.dispatch(0);
        assert_eq!(theme_session.current_theme(), ThemeId::OneDark);
        assert_eq!(session.active_ui_scheme.as_deref(), Some("onedark"));
        assert_eq!(session.active_code_scheme.as_deref(), Some("monokai"));
    }

    #[test]
    fn test_session_drop_resets_terminal_once() {
        let (mut session, theme_session, buf) = configure_captured();

        session.dispatch(0);
        session.dispatch(0);
        session.dispatch(0);
        buf.borrow_mut().clear();
        drop(theme_session);

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]111\x07\x1b]110\x07");
    }

    #[test]
    fn test_release_then_drop_resets_only_once() {
        let (_, mut theme_session, buf) = configure_captured();

        buf.borrow_mut().clear();
        theme_session.release_terminal();
        drop(theme_session);

        let written = String::from_utf8(buf.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b]111\x07\x1b]110\x07");
    }
}
