// Demo mode: a minimal in-binary host session to showcase the toggle
//
// retint is a configuration layer for an embeddable REPL; the binary ships
// this stand-in host so the whole flow can be exercised end to end without
// one. DemoSession records what the configurator pushes into it and owns
// the smallest possible chord matcher - a pending-key prefix buffer - which
// is demo scaffolding, not a key dispatch engine.
//
// Run with: retint

use crate::config::{Config, SessionOptions};
use crate::session::{ChordAction, Configurator, KeyPress, ReplSession};
use crate::theme::ColorScheme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::collections::HashMap;

/// Stand-in host session
#[derive(Default)]
pub struct DemoSession {
    options: Option<SessionOptions>,
    schemes: HashMap<String, ColorScheme>,
    active_ui_scheme: Option<String>,
    active_code_scheme: Option<String>,
    bindings: Vec<(Vec<KeyPress>, Option<ChordAction>)>,
    pending: Vec<KeyPress>,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press into the chord matcher. Returns the index of a
    /// fully matched binding, if any.
    pub fn match_key(&mut self, key: KeyPress) -> Option<usize> {
        self.pending.push(key);

        if let Some(index) = self
            .bindings
            .iter()
            .position(|(chord, _)| chord == &self.pending)
        {
            self.pending.clear();
            return Some(index);
        }

        if self.chord_prefix_pending() {
            return None;
        }

        // Dead end; the key that broke the sequence may itself start one
        self.pending.clear();
        self.pending.push(key);
        if !self.chord_prefix_pending() {
            self.pending.clear();
        }
        None
    }

    fn chord_prefix_pending(&self) -> bool {
        self.bindings
            .iter()
            .any(|(chord, _)| chord.starts_with(&self.pending))
    }

    /// Invoke the action bound at `index`, handing the session back to it
    pub fn dispatch(&mut self, index: usize) {
        let mut action = self.bindings[index].1.take().expect("chord has an action");
        action(self);
        self.bindings[index].1 = Some(action);
    }
}

impl ReplSession for DemoSession {
    fn apply_options(&mut self, options: &SessionOptions) {
        tracing::info!(
            vi_mode = options.vi.vi_mode,
            completion = options.completion.visualisation.as_str(),
            prompt = options.display.prompt_style.as_str(),
            "options applied"
        );
        self.options = Some(options.clone());
    }

    fn register_color_scheme(&mut self, id: &str, scheme: ColorScheme) {
        tracing::debug!(id, elements = scheme.len(), "color scheme registered");
        self.schemes.insert(id.to_string(), scheme);
    }

    fn use_ui_color_scheme(&mut self, id: &str) {
        tracing::debug!(id, "ui color scheme activated");
        self.active_ui_scheme = Some(id.to_string());
    }

    fn use_code_color_scheme(&mut self, id: &str) {
        tracing::debug!(id, "code color scheme activated");
        self.active_code_scheme = Some(id.to_string());
    }

    fn bind_key_chord(&mut self, chord: &[KeyPress], action: ChordAction) {
        tracing::debug!(keys = chord.len(), "key chord bound");
        self.bindings.push((chord.to_vec(), Some(action)));
    }
}

/// Configure a demo session and run its input loop until q / Esc / Ctrl+C.
pub fn run_demo(config: &Config) -> Result<()> {
    let mut session = DemoSession::new();
    let mut theme_session =
        Configurator::with_stdout(config.options.clone()).configure(&mut session);

    println!("Demo session ready. Ctrl+T Ctrl+T toggles the theme, q quits.");

    loop {
        // Raw mode only around the blocking read, so the toggle's own
        // output renders with normal line discipline.
        enable_raw_mode()?;
        let read = event::read();
        disable_raw_mode()?;

        let Event::Key(key) = read? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            break;
        }

        if let Some(index) = session.match_key(KeyPress::from(key)) {
            session.dispatch(index);
        }
    }

    tracing::info!(
        theme = theme_session.current_theme().display_name(),
        "demo session closed"
    );

    // Give the terminal its own colors back before the process exits
    theme_session.release_terminal();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::THEME_TOGGLE_CHORD;

    fn session_with_toggle_chord() -> DemoSession {
        let mut session = DemoSession::new();
        session.bind_key_chord(&THEME_TOGGLE_CHORD, Box::new(|_| {}));
        session
    }

    #[test]
    fn test_chord_matches_after_two_presses() {
        let mut session = session_with_toggle_chord();

        assert_eq!(session.match_key(KeyPress::ctrl('t')), None);
        assert_eq!(session.match_key(KeyPress::ctrl('t')), Some(0));
        // matcher resets after a match
        assert_eq!(session.match_key(KeyPress::ctrl('t')), None);
        assert_eq!(session.match_key(KeyPress::ctrl('t')), Some(0));
    }

    #[test]
    fn test_interrupted_chord_does_not_match() {
        let mut session = session_with_toggle_chord();

        assert_eq!(session.match_key(KeyPress::ctrl('t')), None);
        assert_eq!(
            session.match_key(KeyPress::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        // the broken sequence must not count toward a later match
        assert_eq!(session.match_key(KeyPress::ctrl('t')), None);
        assert_eq!(session.match_key(KeyPress::ctrl('t')), Some(0));
    }

    #[test]
    fn test_breaking_key_can_restart_a_chord() {
        let mut session = session_with_toggle_chord();
        let mut presses = 0;

        // a-then-ctrl-t: the ctrl-t counts as a fresh chord start
        assert_eq!(
            session.match_key(KeyPress::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(session.match_key(KeyPress::ctrl('t')), None);
        if let Some(index) = session.match_key(KeyPress::ctrl('t')) {
            presses += 1;
            assert_eq!(index, 0);
        }
        assert_eq!(presses, 1);
    }

    #[test]
    fn test_dispatch_restores_binding() {
        let mut session = DemoSession::new();
        session.bind_key_chord(&THEME_TOGGLE_CHORD, Box::new(|_| {}));

        session.dispatch(0);
        assert!(session.bindings[0].1.is_some());
        session.dispatch(0);
    }
}
