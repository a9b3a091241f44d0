// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for configuration and theme management:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the latest template
// - themes --list / --show <id>: Inspect the installed themes

use crate::config::{Config, VERSION};
use crate::theme::{color_to_hex, Theme, ThemeId};
use clap::{Parser, Subcommand};
use ratatui::style::Modifier;
use std::io::Write;
use std::process::Command;

/// retint - terminal-native theming for REPL sessions
#[derive(Parser)]
#[command(name = "retint")]
#[command(version = VERSION)]
#[command(about = "Terminal-native theming for REPL sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Rewrite config with the latest template (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Inspect themes
    Themes {
        /// List installed themes
        #[arg(long)]
        list: bool,

        /// Show a theme's style table ("onedark" or "papercolor")
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else if update {
                handle_config_update();
            } else {
                // No flag provided, show help
                println!("Usage: retint config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Rewrite config with the latest template");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Themes { list, show }) => {
            if let Some(id) = show {
                handle_themes_show(&id);
            } else if list {
                handle_themes_list();
            } else {
                println!("Usage: retint themes [--list|--show <ID>]");
            }
            true
        }
        None => false, // No subcommand, run the demo session
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    // The template already prints every effective value with its docs
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Re-serialize the effective config through the latest template
    let existing = Config::from_env();
    let updated = existing.to_toml();

    // Backup existing
    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

fn handle_themes_list() {
    for id in ThemeId::all() {
        let theme = Theme::load(id);
        let marker = if id == ThemeId::default() {
            "(startup)"
        } else {
            ""
        };
        println!(
            "{:<12} {:<18} {} elements {}",
            id.ui_scheme_id(),
            theme.name,
            theme.scheme.len(),
            marker
        );
    }
}

fn handle_themes_show(id: &str) {
    let Some(theme_id) = ThemeId::from_id(id) else {
        eprintln!("Unknown theme '{}'. Themes: onedark, papercolor", id);
        std::process::exit(1);
    };

    let theme = Theme::load(theme_id);
    println!("# {} (code scheme: {})", theme.name, theme_id.code_scheme_id());
    println!(
        "# terminal: bg {} / fg {}",
        theme.palette.bg_hex(),
        theme.palette.fg_hex()
    );
    println!();

    for element in theme.scheme.element_names() {
        let Some(rule) = theme.scheme.get(element) else {
            continue;
        };

        // Swatch: render the element name in its own style
        let style = rule.to_style();
        let mut swatch = String::new();
        if let Some(ratatui::style::Color::Rgb(r, g, b)) = style.fg {
            swatch.push_str(&format!("\x1b[38;2;{};{};{}m", r, g, b));
        }
        if style.add_modifier.contains(Modifier::BOLD) {
            swatch.push_str("\x1b[1m");
        }
        if style.add_modifier.contains(Modifier::ITALIC) {
            swatch.push_str("\x1b[3m");
        }
        let shown = if element.is_empty() { "(default)" } else { element };
        swatch.push_str(shown);
        swatch.push_str("\x1b[0m");

        let fg = rule.fg.map(color_to_hex).unwrap_or_else(|| "-".to_string());
        let bg = rule.bg.map(color_to_hex).unwrap_or_else(|| "-".to_string());
        println!("{:<60} fg {:<8} bg {:<8}", swatch, fg, bg);
    }
}
