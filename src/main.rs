use anyhow::{Context, Result};
use buzon::app::App;
use buzon::cli::{self, Cli};
use buzon::config::{default_config_dir, AppConfig};
use buzon::events::EventHandler;
use buzon::keyboard::KeyboardManager;
use buzon::theme::ThemeManager;
use buzon::ui::{HintStore, MailView, ViewOptions};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => default_config_dir().context("Cannot determine config directory")?,
    };

    // Handle CLI commands
    if let Some(command) = cli.command {
        return cli::handle_command(&command, &config_dir);
    }

    // Initialize tracing for logging - write to file to avoid interfering with TUI
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("buzon.log")
        .context("Failed to create log file")?;

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_max_level(log_level)
        .init();

    if cli.debug {
        tracing::info!("Debug mode enabled - verbose logging active");
    }

    // Startup configuration
    let config = AppConfig::load_or_create_default(&config_dir)
        .context("Failed to load configuration")?;
    if let Err(issue) = config.validate() {
        tracing::warn!("Configuration problem, falling back to defaults: {}", issue);
    }

    let keyboard_manager =
        KeyboardManager::from_dir(&config_dir).context("Failed to load keyboard configuration")?;
    for issue in keyboard_manager.config().validate() {
        tracing::warn!("Keyboard configuration problem: {}", issue);
    }

    // Layout hints recorded by previous runs win over configured defaults
    let hint_store = HintStore::new(&config_dir);
    let mut options = ViewOptions {
        default_layout: config.layout.ratios,
        default_collapsed: config.layout.collapsed,
        nav_collapsed_size: config.layout.collapsed_size,
        ..ViewOptions::default()
    };
    if !cli.reset_layout {
        if let Some(hints) = hint_store.load() {
            options.default_layout = hints.layout;
            options.default_collapsed = hints.collapsed;
        }
    }

    let mut theme_manager = ThemeManager::new();
    if let Some(name) = &cli.theme {
        theme_manager
            .set_theme(name)
            .map_err(|e| anyhow::anyhow!("{}. Use 'buzon themes' to list available themes.", e))?;
    } else if let Some(name) = &config.theme {
        if let Err(err) = theme_manager.set_theme(name) {
            tracing::warn!("Configured theme not available: {}", err);
        }
    }

    let view = MailView::new(
        options,
        theme_manager,
        hint_store,
        keyboard_manager.clone(),
    );
    let event_handler = EventHandler::with_keyboard_manager(keyboard_manager);

    let mut app = App::new(view, event_handler);
    app.run().await?;

    Ok(())
}
