pub mod color;

use ratatui::style::{Modifier, Style};

pub use color::{
    ColorPalette, MessageListColors, NavColors, ReaderColors, StatusBarColors, ThemeColors,
};

/// A named color scheme for the whole UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Create the default dark theme
    pub fn slate_dark() -> Self {
        Self {
            name: "Slate Dark".to_string(),
            description: "Cool gray dark theme with a blue accent".to_string(),
            colors: ThemeColors::slate_dark(),
        }
    }

    /// Create the light theme
    pub fn slate_light() -> Self {
        Self {
            name: "Slate Light".to_string(),
            description: "Cool gray light theme with a blue accent".to_string(),
            colors: ThemeColors::slate_light(),
        }
    }

    /// Create a high contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            description: "High contrast theme for better accessibility".to_string(),
            colors: ThemeColors::high_contrast(),
        }
    }

    /// Get style for a specific UI component
    pub fn get_component_style(&self, component: &str, focused: bool) -> Style {
        let palette = &self.colors.palette;
        match component {
            "border" => {
                if focused {
                    Style::default().fg(palette.border_focused)
                } else {
                    Style::default().fg(palette.border)
                }
            }
            "title" => {
                if focused {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text_secondary)
                }
            }
            "selection" => {
                if focused {
                    Style::default()
                        .bg(palette.selection)
                        .fg(palette.selection_text)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(palette.surface).fg(palette.text_primary)
                }
            }
            "input" => {
                if focused {
                    Style::default().fg(palette.text_primary)
                } else {
                    Style::default().fg(palette.text_muted)
                }
            }
            "muted" => Style::default().fg(palette.text_muted),
            _ => Style::default().fg(palette.foreground),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate_dark()
    }
}

/// Registry of the built-in themes, switched by name.
#[derive(Debug)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = vec![
            Theme::slate_dark(),
            Theme::slate_light(),
            Theme::high_contrast(),
        ];

        Self {
            current_theme: themes[0].name.clone(),
            themes,
        }
    }

    /// Get the currently active theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name == self.current_theme)
            .unwrap_or(&self.themes[0])
    }

    /// Switch to a different theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        if self.themes.iter().any(|t| t.name == theme_name) {
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", theme_name))
        }
    }

    /// Get list of available themes
    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
