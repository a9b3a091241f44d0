//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/retint/themes/ on first run.
//! Users can then modify them freely; the on-disk copy wins over the
//! bundled one when a theme is loaded.

mod onedark;
mod papercolor;

/// Bundled theme: filename and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "onedark.toml",
        content: onedark::THEME,
    },
    BundledTheme {
        filename: "papercolor.toml",
        content: papercolor::THEME,
    },
];

/// Look up a bundled theme's content by filename
pub fn get(filename: &str) -> Option<&'static str> {
    BUNDLED_THEMES
        .iter()
        .find(|t| t.filename.eq_ignore_ascii_case(filename))
        .map(|t| t.content)
}
