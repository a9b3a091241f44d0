// Startup module - banner and session summary
//
// Printed before the terminal palette is handed over to the theming layer
// (or skipped entirely with show_banner = false / RETINT_NO_BANNER=1).

use crate::config::{Config, VERSION};
use crate::theme::ThemeId;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Print the startup banner and session summary
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}retint{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal-native theming for your REPL session{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}\u{2713}{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    // Themes: startup state plus the one a toggle away
    let startup = ThemeId::default();
    println!(
        "  {GREEN}\u{2713}{RESET} {:<18} {DIM}startup theme{RESET}",
        startup.display_name()
    );
    println!(
        "  {DIM}\u{25cb}{RESET} {DIM}{:<18} via Ctrl+T Ctrl+T{RESET}",
        startup.flipped().display_name()
    );
    println!();

    // A few load-bearing options
    let opts = &config.options;
    println!(
        "  {DIM}vi mode:{RESET} {}  {DIM}completion:{RESET} {}  {DIM}prompt:{RESET} {}",
        on_off(opts.vi.vi_mode),
        opts.completion.visualisation.as_str(),
        opts.display.prompt_style.as_str(),
    );
    println!();

    println!("  {MAGENTA}\u{25b8}{RESET} Terminal colors restored automatically on exit");
    println!();
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Trace the same summary, for hosts that capture logs instead of stdout
pub fn log_startup(config: &Config) {
    tracing::info!("retint v{}", VERSION);
    tracing::info!(
        "startup theme: {} (toggle: Ctrl+T Ctrl+T)",
        ThemeId::default().display_name()
    );
    if let Some(path) = Config::config_path() {
        if path.exists() {
            tracing::info!("config: {}", path.display());
        } else {
            tracing::info!("config: defaults");
        }
    }
    tracing::debug!(level = %config.logging.level, "logging configured");
}
