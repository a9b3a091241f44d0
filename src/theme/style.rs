// Style rules for UI elements
//
// Each element in a color scheme gets one StyleRule: optional foreground,
// optional background, and bold/italic modifiers. Rules are written in theme
// files as compact style strings ("#61afef bg:#282c34 bold") so the TOML
// tables stay readable.

use ratatui::style::{Color, Modifier, Style};

/// Parse a color string to ratatui Color
/// Supports:
/// - Hex format: #RRGGBB
/// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
pub fn parse_color(value: &str) -> Color {
    // Handle ANSI color codes (inherits the terminal's own palette)
    if let Some(ansi) = value.strip_prefix("ansi:") {
        return match ansi {
            "0" => Color::Black,
            "1" => Color::Red,
            "2" => Color::Green,
            "3" => Color::Yellow,
            "4" => Color::Blue,
            "5" => Color::Magenta,
            "6" => Color::Cyan,
            "7" => Color::White,
            "8" => Color::DarkGray,
            "9" => Color::LightRed,
            "10" => Color::LightGreen,
            "11" => Color::LightYellow,
            "12" => Color::LightBlue,
            "13" => Color::LightMagenta,
            "14" => Color::LightCyan,
            "15" => Color::Gray,
            "fg" => Color::Reset, // Use terminal default foreground
            "bg" => Color::Reset, // Use terminal default background
            _ => Color::White,
        };
    }

    // Handle hex format
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White; // fallback
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
    Color::Rgb(r, g, b)
}

/// Format a color as #rrggbb for OSC emission and theme export
pub fn color_to_hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => "#ffffff".to_string(),
    }
}

/// Display style for a single UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub modifiers: Modifier,
}

impl StyleRule {
    /// Parse a compact style string into a rule.
    ///
    /// Whitespace-separated tokens:
    /// - `#RRGGBB` sets the foreground
    /// - `bg:#RRGGBB` sets the background
    /// - `bold` / `italic` add modifiers
    ///
    /// Unknown tokens are ignored so hand-edited theme files degrade
    /// gracefully instead of failing to load.
    pub fn parse(value: &str) -> Self {
        let mut rule = Self {
            fg: None,
            bg: None,
            modifiers: Modifier::empty(),
        };

        for token in value.split_whitespace() {
            if let Some(bg) = token.strip_prefix("bg:") {
                rule.bg = Some(parse_color(bg));
            } else if token == "bold" {
                rule.modifiers |= Modifier::BOLD;
            } else if token == "italic" {
                rule.modifiers |= Modifier::ITALIC;
            } else if token.starts_with('#') || token.starts_with("ansi:") {
                rule.fg = Some(parse_color(token));
            }
            // anything else: ignored
        }

        rule
    }

    /// Resolve to a ratatui Style for host renderers
    pub fn to_style(self) -> Style {
        let mut style = Style::default().add_modifier(self.modifiers);
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("ansi:4"), Color::Blue);
        assert_eq!(parse_color("#bad"), Color::White);
    }

    #[test]
    fn test_color_hex_roundtrip() {
        assert_eq!(color_to_hex(Color::Rgb(40, 44, 52)), "#282c34");
        assert_eq!(
            parse_color(&color_to_hex(Color::Rgb(238, 238, 238))),
            Color::Rgb(238, 238, 238)
        );
        // Non-RGB colors have no stable hex form
        assert_eq!(color_to_hex(Color::Blue), "#ffffff");
    }

    #[test]
    fn test_parse_full_rule() {
        let rule = StyleRule::parse("#61afef bg:#282c34 bold");
        assert_eq!(rule.fg, Some(Color::Rgb(0x61, 0xaf, 0xef)));
        assert_eq!(rule.bg, Some(Color::Rgb(0x28, 0x2c, 0x34)));
        assert!(rule.modifiers.contains(Modifier::BOLD));
        assert!(!rule.modifiers.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_parse_background_only() {
        let rule = StyleRule::parse("bg:#2c313c");
        assert_eq!(rule.fg, None);
        assert_eq!(rule.bg, Some(Color::Rgb(0x2c, 0x31, 0x3c)));
        assert!(rule.modifiers.is_empty());
    }

    #[test]
    fn test_parse_italic() {
        let rule = StyleRule::parse("#5c6370 bg:#282c34 italic");
        assert!(rule.modifiers.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let rule = StyleRule::parse("#5c6370 underline nohinherit");
        assert_eq!(rule.fg, Some(Color::Rgb(0x5c, 0x63, 0x70)));
        assert!(rule.modifiers.is_empty());
    }

    #[test]
    fn test_to_style() {
        let style = StyleRule::parse("#61afef bg:#282c34 bold").to_style();
        assert_eq!(style.fg, Some(Color::Rgb(0x61, 0xaf, 0xef)));
        assert_eq!(style.bg, Some(Color::Rgb(0x28, 0x2c, 0x34)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
