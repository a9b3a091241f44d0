// retint - terminal-native theming for REPL sessions
//
// A configuration layer for an embeddable REPL host: it applies the
// session's behavioral options, installs the OneDark and PaperColor Light
// color schemes, recolors the hosting terminal to match, and binds a
// Ctrl+T Ctrl+T chord that flips all three color surfaces together.
//
// Architecture:
// - theme: ThemeId selector, bundled TOML schemes, style parsing
// - term: raw OSC color emitter plus the exit-time reset guard
// - toggle: the two-state theme flip
// - session: ReplSession host contract and the one-shot Configurator
// - demo: stand-in host so the binary runs without a real REPL

mod cli;
mod config;
mod demo;
mod session;
mod startup;
mod term;
mod theme;
mod toggle;

use anyhow::Result;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Handle CLI commands first (config/themes subcommands exit early)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let config = Config::from_env();

    // Initialize tracing. Logs go to stderr so they never interleave with
    // the OSC sequences and prompts on stdout.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("retint={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.show_banner {
        startup::print_startup(&config);
    }
    startup::log_startup(&config);

    demo::run_demo(&config)?;

    tracing::info!("terminal colors restored");
    Ok(())
}
