use ratatui::style::Modifier;

use buzon::theme::{Theme, ThemeManager};

#[test]
fn test_theme_creation() {
    let dark = Theme::slate_dark();
    assert_eq!(dark.name, "Slate Dark");
    assert!(!dark.description.is_empty());

    let light = Theme::slate_light();
    assert_eq!(light.name, "Slate Light");

    let high_contrast = Theme::high_contrast();
    assert_eq!(high_contrast.name, "High Contrast");
}

#[test]
fn test_default_theme_is_slate_dark() {
    assert_eq!(Theme::default().name, "Slate Dark");

    let manager = ThemeManager::new();
    assert_eq!(manager.current_theme().name, "Slate Dark");
}

#[test]
fn test_theme_manager_switching() {
    let mut manager = ThemeManager::new();

    assert!(manager.set_theme("Slate Light").is_ok());
    assert_eq!(manager.current_theme().name, "Slate Light");

    assert!(manager.set_theme("High Contrast").is_ok());
    assert_eq!(manager.current_theme().name, "High Contrast");
}

#[test]
fn test_unknown_theme_is_rejected() {
    let mut manager = ThemeManager::new();

    let result = manager.set_theme("Solarized");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Solarized"));
    // The active theme is untouched after a failed switch.
    assert_eq!(manager.current_theme().name, "Slate Dark");
}

#[test]
fn test_available_themes() {
    let manager = ThemeManager::new();
    let names = manager.available_themes();

    assert_eq!(names, ["Slate Dark", "Slate Light", "High Contrast"]);
    assert_eq!(manager.themes().len(), names.len());
}

#[test]
fn test_component_styles_differ_by_focus() {
    let theme = Theme::slate_dark();

    let focused = theme.get_component_style("border", true);
    let unfocused = theme.get_component_style("border", false);
    assert_ne!(focused.fg, unfocused.fg);

    let title = theme.get_component_style("title", true);
    assert!(title.add_modifier.contains(Modifier::BOLD));

    let selection = theme.get_component_style("selection", true);
    assert!(selection.bg.is_some());
}

#[test]
fn test_themes_use_distinct_backgrounds() {
    let dark = Theme::slate_dark();
    let light = Theme::slate_light();

    assert_ne!(
        dark.colors.palette.background,
        light.colors.palette.background
    );
}
