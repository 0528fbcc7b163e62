use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the keyboard configuration inside the config directory.
pub const KEYBOARD_FILE_NAME: &str = "keyboard.toml";

/// A key plus its modifiers.
///
/// Serialized as a single canonical string ("ctrl+c", "backtab", "{") so the
/// shortcut map stays a plain string-keyed TOML table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct KeyboardShortcut {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyboardShortcut {
    pub fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a simple key shortcut without modifiers
    pub fn simple(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::NONE)
    }

    /// Create a Ctrl+key shortcut
    pub fn ctrl(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::CONTROL)
    }

    fn canonical(&self) -> String {
        let mut out = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            out.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            out.push_str("alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            out.push_str("shift+");
        }

        match self.key {
            KeyCode::Char(' ') => out.push_str("space"),
            KeyCode::Char(c) => out.push(c),
            KeyCode::F(n) => out.push_str(&format!("f{}", n)),
            KeyCode::Enter => out.push_str("enter"),
            KeyCode::Esc => out.push_str("esc"),
            KeyCode::Tab => out.push_str("tab"),
            KeyCode::BackTab => out.push_str("backtab"),
            KeyCode::Backspace => out.push_str("backspace"),
            KeyCode::Delete => out.push_str("delete"),
            KeyCode::Insert => out.push_str("insert"),
            KeyCode::Home => out.push_str("home"),
            KeyCode::End => out.push_str("end"),
            KeyCode::PageUp => out.push_str("pageup"),
            KeyCode::PageDown => out.push_str("pagedown"),
            KeyCode::Up => out.push_str("up"),
            KeyCode::Down => out.push_str("down"),
            KeyCode::Left => out.push_str("left"),
            KeyCode::Right => out.push_str("right"),
            other => out.push_str(&format!("{:?}", other).to_lowercase()),
        }

        out
    }
}

impl From<KeyboardShortcut> for String {
    fn from(shortcut: KeyboardShortcut) -> Self {
        shortcut.canonical()
    }
}

impl TryFrom<String> for KeyboardShortcut {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = value.as_str();

        loop {
            if let Some(stripped) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = stripped;
            } else {
                break;
            }
        }

        let key = if rest.chars().count() == 1 {
            KeyCode::Char(rest.chars().next().ok_or("empty shortcut")?)
        } else {
            match rest {
                "space" => KeyCode::Char(' '),
                "enter" => KeyCode::Enter,
                "esc" => KeyCode::Esc,
                "tab" => KeyCode::Tab,
                "backtab" => KeyCode::BackTab,
                "backspace" => KeyCode::Backspace,
                "delete" => KeyCode::Delete,
                "insert" => KeyCode::Insert,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                "pageup" => KeyCode::PageUp,
                "pagedown" => KeyCode::PageDown,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                fkey if fkey.starts_with('f') => {
                    let n: u8 = fkey[1..]
                        .parse()
                        .map_err(|_| format!("unknown key '{}'", fkey))?;
                    KeyCode::F(n)
                }
                other => return Err(format!("unknown key '{}'", other)),
            }
        };

        Ok(Self::new(key, modifiers))
    }
}

impl std::fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }

        let key_str = match self.key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if !self.modifiers.is_empty() => c.to_uppercase().to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{}", n),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            _ => format!("{:?}", self.key),
        };

        if parts.is_empty() {
            write!(f, "{}", key_str)
        } else {
            write!(f, "{}+{}", parts.join("+"), key_str)
        }
    }
}

/// Actions that can be triggered by keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyboardAction {
    // Global actions
    Quit,
    ForceQuit,

    // Navigation
    NextPane,
    PreviousPane,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Selection and interaction
    Select,
    Escape,

    // Message list
    ToggleUnreadFilter,
    StartSearch,

    // Reader
    ScrollToTop,
    ScrollToBottom,

    // Layout
    ShrinkNavPane,
    GrowNavPane,
    ToggleNavPane,
    ShrinkListPane,
    GrowListPane,
}

impl KeyboardAction {
    pub fn description(&self) -> &'static str {
        match self {
            KeyboardAction::Quit => "Quit the application",
            KeyboardAction::ForceQuit => "Quit immediately",
            KeyboardAction::NextPane => "Focus the next pane",
            KeyboardAction::PreviousPane => "Focus the previous pane",
            KeyboardAction::MoveUp => "Move up within the pane",
            KeyboardAction::MoveDown => "Move down within the pane",
            KeyboardAction::MoveLeft => "Focus the pane to the left",
            KeyboardAction::MoveRight => "Focus the pane to the right",
            KeyboardAction::Select => "Activate the highlighted item",
            KeyboardAction::Escape => "Dismiss search input",
            KeyboardAction::ToggleUnreadFilter => "Switch between all and unread",
            KeyboardAction::StartSearch => "Edit the search field",
            KeyboardAction::ScrollToTop => "Jump to the top of the message",
            KeyboardAction::ScrollToBottom => "Jump to the end of the message",
            KeyboardAction::ShrinkNavPane => "Narrow the navigation pane",
            KeyboardAction::GrowNavPane => "Widen the navigation pane",
            KeyboardAction::ToggleNavPane => "Collapse or expand the navigation pane",
            KeyboardAction::ShrinkListPane => "Narrow the list pane",
            KeyboardAction::GrowListPane => "Widen the list pane",
        }
    }
}

/// Configuration for keyboard shortcuts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Mapping of shortcuts to actions
    shortcuts: HashMap<KeyboardShortcut, KeyboardAction>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        let mut config = KeyboardConfig {
            shortcuts: HashMap::new(),
        };
        config.setup_default_shortcuts();
        config
    }
}

impl KeyboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn setup_default_shortcuts(&mut self) {
        // Global actions
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('q')),
            KeyboardAction::Quit,
        );
        self.shortcuts.insert(
            KeyboardShortcut::ctrl(KeyCode::Char('c')),
            KeyboardAction::ForceQuit,
        );

        // Pane focus
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Tab),
            KeyboardAction::NextPane,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::BackTab),
            KeyboardAction::PreviousPane,
        );

        // Movement, vim keys and arrows
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('j')),
            KeyboardAction::MoveDown,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('k')),
            KeyboardAction::MoveUp,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('h')),
            KeyboardAction::MoveLeft,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('l')),
            KeyboardAction::MoveRight,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Down),
            KeyboardAction::MoveDown,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Up),
            KeyboardAction::MoveUp,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Left),
            KeyboardAction::MoveLeft,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Right),
            KeyboardAction::MoveRight,
        );

        // Selection and interaction
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Enter),
            KeyboardAction::Select,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Esc),
            KeyboardAction::Escape,
        );

        // Message list
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('u')),
            KeyboardAction::ToggleUnreadFilter,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('/')),
            KeyboardAction::StartSearch,
        );

        // Reader
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Home),
            KeyboardAction::ScrollToTop,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::End),
            KeyboardAction::ScrollToBottom,
        );

        // Layout
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('[')),
            KeyboardAction::ShrinkNavPane,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char(']')),
            KeyboardAction::GrowNavPane,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('b')),
            KeyboardAction::ToggleNavPane,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('{')),
            KeyboardAction::ShrinkListPane,
        );
        self.shortcuts.insert(
            KeyboardShortcut::simple(KeyCode::Char('}')),
            KeyboardAction::GrowListPane,
        );
    }

    pub fn get_action(&self, shortcut: &KeyboardShortcut) -> Option<&KeyboardAction> {
        self.shortcuts.get(shortcut)
    }

    /// Add or replace a binding
    pub fn set_shortcut(&mut self, shortcut: KeyboardShortcut, action: KeyboardAction) {
        self.shortcuts.insert(shortcut, action);
    }

    /// All shortcuts bound to an action, shortest canonical form first.
    ///
    /// Movement actions carry several bindings (vim keys and arrows); the
    /// ordering keeps the single-character form in front so hint rows stay
    /// compact.
    pub fn shortcuts_for_action(&self, action: KeyboardAction) -> Vec<KeyboardShortcut> {
        let mut matches: Vec<KeyboardShortcut> = self
            .shortcuts
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(shortcut, _)| *shortcut)
            .collect();
        matches.sort_by(|a, b| {
            let (a, b) = (a.canonical(), b.canonical());
            a.len().cmp(&b.len()).then_with(|| a.cmp(&b))
        });
        matches
    }

    /// Every binding, sorted by its canonical shortcut string.
    pub fn binding_list(&self) -> Vec<(KeyboardShortcut, KeyboardAction)> {
        let mut bindings: Vec<(KeyboardShortcut, KeyboardAction)> = self
            .shortcuts
            .iter()
            .map(|(shortcut, action)| (*shortcut, *action))
            .collect();
        bindings.sort_by_key(|(shortcut, _)| shortcut.canonical());
        bindings
    }

    /// Load keyboard configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: KeyboardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save keyboard configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the keyboard configuration from the given config directory,
    /// creating the file with defaults when it does not exist
    pub fn load_or_create_default(config_dir: &Path) -> Result<Self> {
        let config_path = Self::config_path(config_dir);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            fs::create_dir_all(config_dir)?;
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(KEYBOARD_FILE_NAME)
    }

    /// Validate the configuration for missing essential bindings
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let essential_actions = vec![
            KeyboardAction::Quit,
            KeyboardAction::ForceQuit,
            KeyboardAction::NextPane,
            KeyboardAction::Select,
            KeyboardAction::Escape,
        ];

        for action in essential_actions {
            if !self.shortcuts.values().any(|a| *a == action) {
                issues.push(format!(
                    "Missing essential shortcut for action: {:?}",
                    action
                ));
            }
        }

        issues
    }
}

/// Manager for keyboard shortcuts and configuration
#[derive(Debug, Clone)]
pub struct KeyboardManager {
    config: KeyboardConfig,
}

impl KeyboardManager {
    /// Create a keyboard manager backed by the config directory
    pub fn from_dir(config_dir: &Path) -> Result<Self> {
        let config = KeyboardConfig::load_or_create_default(config_dir)?;
        Ok(Self { config })
    }

    /// Create a keyboard manager with a specific configuration
    pub fn with_config(config: KeyboardConfig) -> Self {
        Self { config }
    }

    /// Get the action for a key event.
    ///
    /// Shifted characters arrive as the resulting character plus SHIFT, so
    /// the modifier is dropped before lookup for Char keys.
    pub fn get_action(
        &self,
        key_code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<&KeyboardAction> {
        let modifiers = match key_code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let shortcut = KeyboardShortcut::new(key_code, modifiers);

        self.config.get_action(&shortcut)
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        Self::with_config(KeyboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_canonical_form_round_trips() {
        let shortcuts = [
            KeyboardShortcut::simple(KeyCode::Char('q')),
            KeyboardShortcut::simple(KeyCode::Char('{')),
            KeyboardShortcut::simple(KeyCode::Char(' ')),
            KeyboardShortcut::ctrl(KeyCode::Char('c')),
            KeyboardShortcut::simple(KeyCode::BackTab),
            KeyboardShortcut::simple(KeyCode::Home),
            KeyboardShortcut::simple(KeyCode::F(5)),
            KeyboardShortcut::ctrl(KeyCode::Left),
        ];

        for shortcut in shortcuts {
            let text = String::from(shortcut);
            let parsed = KeyboardShortcut::try_from(text.clone()).unwrap();
            assert_eq!(parsed, shortcut, "canonical form '{}' did not round trip", text);
        }
    }

    #[test]
    fn test_canonical_form_examples() {
        assert_eq!(
            String::from(KeyboardShortcut::ctrl(KeyCode::Char('c'))),
            "ctrl+c"
        );
        assert_eq!(String::from(KeyboardShortcut::simple(KeyCode::Tab)), "tab");
        assert_eq!(String::from(KeyboardShortcut::simple(KeyCode::Char('/'))), "/");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(KeyboardShortcut::try_from("bogus".to_string()).is_err());
        assert!(KeyboardShortcut::try_from("ctrl+".to_string()).is_err());
    }

    #[test]
    fn test_default_bindings() {
        let config = KeyboardConfig::default();
        assert_eq!(
            config.get_action(&KeyboardShortcut::simple(KeyCode::Char('q'))),
            Some(&KeyboardAction::Quit)
        );
        assert_eq!(
            config.get_action(&KeyboardShortcut::simple(KeyCode::Home)),
            Some(&KeyboardAction::ScrollToTop)
        );
        assert_eq!(
            config.get_action(&KeyboardShortcut::simple(KeyCode::Char('u'))),
            Some(&KeyboardAction::ToggleUnreadFilter)
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = KeyboardConfig::default();
        config.set_shortcut(
            KeyboardShortcut::simple(KeyCode::Char('x')),
            KeyboardAction::Quit,
        );

        let path = dir.path().join(KEYBOARD_FILE_NAME);
        config.save_to_file(&path).unwrap();
        let loaded = KeyboardConfig::load_from_file(&path).unwrap();

        assert_eq!(
            loaded.get_action(&KeyboardShortcut::simple(KeyCode::Char('x'))),
            Some(&KeyboardAction::Quit)
        );
        assert_eq!(
            loaded.get_action(&KeyboardShortcut::simple(KeyCode::Tab)),
            Some(&KeyboardAction::NextPane)
        );
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = TempDir::new().unwrap();
        let config = KeyboardConfig::load_or_create_default(dir.path()).unwrap();
        assert!(KeyboardConfig::config_path(dir.path()).exists());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_manager_drops_shift_for_char_keys() {
        let manager = KeyboardManager::default();
        assert_eq!(
            manager.get_action(KeyCode::Char('{'), KeyModifiers::SHIFT),
            Some(&KeyboardAction::ShrinkListPane)
        );
        assert_eq!(
            manager.get_action(KeyCode::Char('z'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_validate_flags_empty_config() {
        let config = KeyboardConfig {
            shortcuts: HashMap::new(),
        };
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.contains("Quit")));
    }

    #[test]
    fn test_reverse_lookup_prefers_short_forms() {
        let config = KeyboardConfig::default();

        let down = config.shortcuts_for_action(KeyboardAction::MoveDown);
        assert_eq!(down.len(), 2);
        assert_eq!(down[0], KeyboardShortcut::simple(KeyCode::Char('j')));
        assert_eq!(down[1], KeyboardShortcut::simple(KeyCode::Down));

        let select = config.shortcuts_for_action(KeyboardAction::Select);
        assert_eq!(select, vec![KeyboardShortcut::simple(KeyCode::Enter)]);

        assert!(config
            .shortcuts_for_action(KeyboardAction::Quit)
            .contains(&KeyboardShortcut::simple(KeyCode::Char('q'))));
    }

    #[test]
    fn test_reverse_lookup_follows_rebinding() {
        let mut config = KeyboardConfig::default();
        config.set_shortcut(
            KeyboardShortcut::simple(KeyCode::Char('f')),
            KeyboardAction::ToggleUnreadFilter,
        );

        let bound = config.shortcuts_for_action(KeyboardAction::ToggleUnreadFilter);
        assert_eq!(bound[0], KeyboardShortcut::simple(KeyCode::Char('f')));
    }

    #[test]
    fn test_binding_list_is_sorted_and_described() {
        let config = KeyboardConfig::default();
        let bindings = config.binding_list();

        assert_eq!(bindings.len(), 23);
        for pair in bindings.windows(2) {
            assert!(pair[0].0.canonical() <= pair[1].0.canonical());
        }
        for (shortcut, action) in &bindings {
            assert!(!shortcut.to_string().is_empty());
            assert!(!action.description().is_empty());
        }

        let force_quit = bindings
            .iter()
            .find(|(_, action)| *action == KeyboardAction::ForceQuit)
            .unwrap();
        assert_eq!(force_quit.0.to_string(), "Ctrl+C");
    }
}
