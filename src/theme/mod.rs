// Theme system for the REPL session
//
// Architecture:
// - TomlScheme: on-disk/bundled theme format ([meta] + [terminal] + [styles])
// - Theme: resolved theme - terminal palette plus a ColorScheme of StyleRules
// - ThemeId: the two-theme selector the toggle flips between
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/retint/themes/*.toml
// 2. Bundled themes (extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod style;
mod toml_format;

pub use style::{color_to_hex, parse_color, StyleRule};
pub use toml_format::TomlScheme;

use ratatui::style::Color;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The two-theme selector. Exactly one theme is current at any time; the
/// starting theme is always OneDark - nothing persisted is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeId {
    #[default]
    OneDark,
    PaperColor,
}

impl ThemeId {
    /// Both themes, dark first
    pub fn all() -> [ThemeId; 2] {
        [ThemeId::OneDark, ThemeId::PaperColor]
    }

    /// The other theme. Toggling is a total 2-state flip; applying it twice
    /// is the identity.
    pub fn flipped(self) -> Self {
        match self {
            ThemeId::OneDark => ThemeId::PaperColor,
            ThemeId::PaperColor => ThemeId::OneDark,
        }
    }

    /// Identifier the UI color scheme is registered under in the host
    pub fn ui_scheme_id(self) -> &'static str {
        match self {
            ThemeId::OneDark => "onedark",
            ThemeId::PaperColor => "papercolor",
        }
    }

    /// Companion syntax-highlighting scheme for this theme's brightness.
    ///
    /// This pairing is a naming convention (dark UI -> dark code scheme),
    /// not derived from the scheme data. A third theme would need an
    /// explicit mapping here.
    pub fn code_scheme_id(self) -> &'static str {
        match self {
            ThemeId::OneDark => "monokai",
            ThemeId::PaperColor => "default",
        }
    }

    /// Human-readable name for banners and the toggle confirmation
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeId::OneDark => "OneDark",
            ThemeId::PaperColor => "PaperColor Light",
        }
    }

    /// Icon used in the toggle confirmation message
    pub fn icon(self) -> &'static str {
        match self {
            ThemeId::OneDark => "\u{1f319}",  // crescent moon
            ThemeId::PaperColor => "\u{1f31e}", // sun
        }
    }

    /// Parse a CLI/theme-file identifier ("onedark", "papercolor")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "onedark" => Some(ThemeId::OneDark),
            "papercolor" => Some(ThemeId::PaperColor),
            _ => None,
        }
    }
}

/// Raw terminal background/foreground pair, sent to the hosting terminal
/// via OSC escape sequences. Independent of the host-internal ColorScheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPalette {
    pub background: Color,
    pub foreground: Color,
}

impl TerminalPalette {
    pub fn bg_hex(&self) -> String {
        color_to_hex(self.background)
    }

    pub fn fg_hex(&self) -> String {
        color_to_hex(self.foreground)
    }
}

/// Mapping from UI element name to display style, used by the host
/// session's renderer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorScheme {
    rules: BTreeMap<String, StyleRule>,
}

impl ColorScheme {
    pub fn get(&self, element: &str) -> Option<&StyleRule> {
        self.rules.get(element)
    }

    /// Element names in sorted order
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Complete resolved theme ready for registration with a host session.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub palette: TerminalPalette,
    pub scheme: ColorScheme,
}

impl Theme {
    /// Load a theme, preferring the user's extracted/edited copy on disk
    /// over the bundled one
    pub fn load(id: ThemeId) -> Self {
        let filename = format!("{}.toml", id.ui_scheme_id());

        if let Some(themes_dir) = Self::themes_dir() {
            let path = themes_dir.join(&filename);
            if path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&path) {
                    if let Ok(scheme) = TomlScheme::from_str(&contents) {
                        return Self::from_toml(scheme);
                    }
                }
            }
        }

        Self::bundled(id)
    }

    /// Load the compiled-in copy of a theme
    pub fn bundled(id: ThemeId) -> Self {
        let filename = format!("{}.toml", id.ui_scheme_id());
        bundled::get(&filename)
            .and_then(|content| TomlScheme::from_str(content).ok())
            .map(Self::from_toml)
            .unwrap_or_else(Self::hardcoded_default)
    }

    /// Resolve a parsed TOML scheme into a usable theme
    pub fn from_toml(toml: TomlScheme) -> Self {
        let rules = toml
            .styles
            .iter()
            .map(|(element, value)| (element.clone(), StyleRule::parse(value)))
            .collect();

        Self {
            name: toml.meta.name.clone(),
            palette: TerminalPalette {
                background: parse_color(&toml.terminal.background),
                foreground: parse_color(&toml.terminal.foreground),
            },
            scheme: ColorScheme { rules },
        }
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("retint").join("themes"))
    }

    /// Hardcoded fallback when no theme files can be loaded.
    /// OneDark base colors with a minimal style table.
    fn hardcoded_default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(String::new(), StyleRule::parse("#abb2bf bg:#282c34"));
        rules.insert("prompt".to_string(), StyleRule::parse("#61afef bg:#282c34 bold"));
        rules.insert("error".to_string(), StyleRule::parse("#e06c75 bg:#282c34"));

        Self {
            name: "OneDark (Fallback)".to_string(),
            palette: TerminalPalette {
                background: Color::Rgb(40, 44, 52),
                foreground: Color::Rgb(171, 178, 191),
            },
            scheme: ColorScheme { rules },
        }
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Check if we've already extracted (marker file)
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_onedark() {
        assert_eq!(ThemeId::default(), ThemeId::OneDark);
    }

    #[test]
    fn test_flip_is_involution() {
        for id in ThemeId::all() {
            assert_ne!(id.flipped(), id);
            assert_eq!(id.flipped().flipped(), id);
        }
    }

    #[test]
    fn test_scheme_ids() {
        assert_eq!(ThemeId::OneDark.ui_scheme_id(), "onedark");
        assert_eq!(ThemeId::PaperColor.ui_scheme_id(), "papercolor");
        assert_eq!(ThemeId::OneDark.code_scheme_id(), "monokai");
        assert_eq!(ThemeId::PaperColor.code_scheme_id(), "default");
    }

    #[test]
    fn test_from_id() {
        assert_eq!(ThemeId::from_id("onedark"), Some(ThemeId::OneDark));
        assert_eq!(ThemeId::from_id("PaperColor"), Some(ThemeId::PaperColor));
        assert_eq!(ThemeId::from_id("dracula"), None);
    }

    #[test]
    fn test_bundled_onedark_palette() {
        let theme = Theme::bundled(ThemeId::OneDark);
        assert_eq!(theme.name, "OneDark");
        assert_eq!(theme.palette.background, Color::Rgb(0x28, 0x2c, 0x34));
        assert_eq!(theme.palette.foreground, Color::Rgb(0xab, 0xb2, 0xbf));
        assert_eq!(theme.palette.bg_hex(), "#282c34");
        assert_eq!(theme.palette.fg_hex(), "#abb2bf");
    }

    #[test]
    fn test_bundled_papercolor_palette() {
        let theme = Theme::bundled(ThemeId::PaperColor);
        assert_eq!(theme.name, "PaperColor Light");
        assert_eq!(theme.palette.bg_hex(), "#eeeeee");
        assert_eq!(theme.palette.fg_hex(), "#444444");
    }

    /// Every element styled in one scheme must be styled in the other, so
    /// toggling never leaves an element unstyled.
    #[test]
    fn test_bundled_schemes_structural_parity() {
        let dark = Theme::bundled(ThemeId::OneDark);
        let light = Theme::bundled(ThemeId::PaperColor);

        assert!(!dark.scheme.is_empty());
        assert_eq!(dark.scheme.len(), light.scheme.len());

        let dark_names: Vec<&str> = dark.scheme.element_names().collect();
        let light_names: Vec<&str> = light.scheme.element_names().collect();
        assert_eq!(dark_names, light_names);
    }

    #[test]
    fn test_bundled_onedark_styles() {
        let theme = Theme::bundled(ThemeId::OneDark);
        let prompt = theme.scheme.get("prompt").expect("prompt styled");
        assert_eq!(prompt.fg, Some(Color::Rgb(0x61, 0xaf, 0xef)));
        assert!(prompt.modifiers.contains(ratatui::style::Modifier::BOLD));

        // root element ("") carries the default fg/bg pair
        let root = theme.scheme.get("").expect("root styled");
        assert_eq!(root.bg, Some(Color::Rgb(0x28, 0x2c, 0x34)));
    }

    #[test]
    fn test_hardcoded_fallback_matches_onedark_palette() {
        let theme = Theme::hardcoded_default();
        assert_eq!(theme.palette.bg_hex(), "#282c34");
        assert!(theme.scheme.get("prompt").is_some());
    }
}
