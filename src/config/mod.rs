//! Configuration for the theming layer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/retint/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Note: the startup theme is deliberately NOT configurable. The session
//! always starts in OneDark; the toggle is the only writer of theme state.

use std::path::PathBuf;

use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod options;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use options::{
    ColorDepth, CompletionOptions, CompletionVisualisation, CursorShape, DisplayOptions,
    EditingOptions, FileCompletionOptions, FileDisplayOptions, FileEditingOptions, FileViOptions,
    PromptStyle, SessionOptions, ViOptions,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Behavioral options handed to the host session
    pub options: SessionOptions,

    /// Print the startup banner before the host takes over
    pub show_banner: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: SessionOptions::default(),
            show_banner: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (everything optional, merged over defaults)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub show_banner: Option<bool>,

    /// Optional [display] section
    pub display: Option<FileDisplayOptions>,

    /// Optional [completion] section
    pub completion: Option<FileCompletionOptions>,

    /// Optional [editing] section
    pub editing: Option<FileEditingOptions>,

    /// Optional [vi] section
    pub vi: Option<FileViOptions>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Logging section as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/retint/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("retint").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear message instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("retint: failed to parse config file");
                    eprintln!("  File: {}", path.display());
                    eprintln!("  Error: {}", e);
                    eprintln!("  To reset, run: retint config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("retint: cannot read config file");
                eprintln!("  File: {}", path.display());
                eprintln!("  Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_parts(file)
    }

    /// Merge a parsed file config with env overrides and defaults
    pub(crate) fn from_parts(file: FileConfig) -> Self {
        // Banner: env > file > default (RETINT_NO_BANNER=1 disables)
        let show_banner = std::env::var("RETINT_NO_BANNER")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or_else(|_| file.show_banner.unwrap_or(true));

        // Log level: env > file > default
        let level = std::env::var("RETINT_LOG_LEVEL")
            .ok()
            .or_else(|| file.logging.and_then(|l| l.level))
            .unwrap_or_else(|| "info".to_string());

        let options = SessionOptions {
            display: DisplayOptions::from_file(file.display),
            completion: CompletionOptions::from_file(file.completion),
            editing: EditingOptions::from_file(file.editing),
            vi: ViOptions::from_file(file.vi),
        };

        Self {
            options,
            show_banner,
            logging: LoggingConfig { level },
        }
    }
}
