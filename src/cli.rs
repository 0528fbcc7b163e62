use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::keyboard::KeyboardConfig;
use crate::theme::ThemeManager;
use crate::ui::hints::HintStore;

/// Buzon - three-pane terminal mail viewer
#[derive(Parser)]
#[command(name = "buzon")]
#[command(about = "A three-pane TUI mail viewer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Theme to activate for this run
    #[arg(long)]
    pub theme: Option<String>,

    /// Ignore mirrored layout hints and start from configured defaults
    #[arg(long)]
    pub reset_layout: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available themes
    Themes,

    /// List the active key bindings
    Keys,

    /// Show configuration files and active startup values
    Config,
}

/// Handle CLI subcommands that run without the interface
pub fn handle_command(command: &Commands, config_dir: &Path) -> Result<()> {
    match command {
        Commands::Themes => handle_themes(),
        Commands::Keys => handle_keys(config_dir),
        Commands::Config => handle_config(config_dir),
    }
}

fn handle_themes() -> Result<()> {
    let manager = ThemeManager::new();
    let current = manager.current_theme().name.clone();

    println!("Available themes:");
    for theme in manager.themes() {
        let marker = if theme.name == current { "*" } else { " " };
        println!("  {} {:<16} {}", marker, theme.name, theme.description);
    }

    Ok(())
}

fn handle_keys(config_dir: &Path) -> Result<()> {
    let config = KeyboardConfig::load_or_create_default(config_dir)?;

    println!(
        "Key bindings ({}):",
        KeyboardConfig::config_path(config_dir).display()
    );
    for (shortcut, action) in config.binding_list() {
        println!("  {:<12} {}", shortcut.to_string(), action.description());
    }

    Ok(())
}

fn handle_config(config_dir: &Path) -> Result<()> {
    println!("Configuration directory: {}", config_dir.display());
    println!("  config:   {}", AppConfig::config_path(config_dir).display());
    println!("  keyboard: {}", KeyboardConfig::config_path(config_dir).display());

    let store = HintStore::new(config_dir);
    println!("  hints:    {}", store.path().display());

    let config = AppConfig::load_or_create_default(config_dir)?;
    println!();
    println!("Startup values:");
    println!(
        "  theme:     {}",
        config.theme.as_deref().unwrap_or("Slate Dark")
    );
    println!(
        "  ratios:    {} / {} / {}",
        config.layout.ratios[0], config.layout.ratios[1], config.layout.ratios[2]
    );
    println!("  collapsed: {}", config.layout.collapsed);

    match store.load() {
        Some(hints) => println!(
            "  hints:     {:?} collapsed={}",
            hints.layout, hints.collapsed
        ),
        None => println!("  hints:     none recorded"),
    }

    Ok(())
}
