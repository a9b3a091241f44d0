// TOML theme format parser
//
// This is the native theme format for retint. A theme file has three
// sections:
//
//   [meta]      name/version/author
//   [terminal]  raw background/foreground sent to the hosting terminal (OSC)
//   [styles]    element name -> compact style string for the host renderer
//
// Format version: 1

use serde::Deserialize;
use std::collections::BTreeMap;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlScheme {
    pub meta: ThemeMeta,
    pub terminal: TerminalSection,
    pub styles: BTreeMap<String, String>,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Metadata for theme attribution
    pub author: Option<String>,
}

/// Raw terminal colors, emitted via OSC 11/10
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalSection {
    pub background: String,
    pub foreground: String,
}

impl TomlScheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scheme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[terminal]
background = "#1e1e2e"
foreground = "#cdd6f4"

[styles]
"" = "#cdd6f4 bg:#1e1e2e"
prompt = "#89b4fa bg:#1e1e2e bold"
error = "#f38ba8 bg:#1e1e2e"
"##;

        let scheme = TomlScheme::from_str(toml).unwrap();
        assert_eq!(scheme.meta.name, "Test Theme");
        assert_eq!(scheme.meta.version, 1);
        assert_eq!(scheme.terminal.background, "#1e1e2e");
        assert_eq!(scheme.styles.len(), 3);
        assert_eq!(scheme.styles["prompt"], "#89b4fa bg:#1e1e2e bold");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let toml = r#"
[meta]
name = "Broken"
version = 1
"#;
        assert!(TomlScheme::from_str(toml).is_err());
    }
}
