use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Trait for status bar segments that can be rendered
pub trait StatusSegment {
    /// Get the content to display in this segment
    fn content(&self) -> String;

    /// Get the minimum width required for this segment
    fn min_width(&self) -> u16;

    /// Get the priority of this segment (higher = more important)
    fn priority(&self) -> u8;

    /// Whether this segment should be visible
    fn is_visible(&self) -> bool {
        true
    }

    /// Get custom styling for this segment (optional)
    fn custom_style(&self, _theme: &Theme) -> Option<Style> {
        None
    }
}

/// Mail counts plus the active list tab.
#[derive(Debug, Clone)]
pub struct MailStatusSegment {
    pub unread_count: usize,
    pub total_count: usize,
    pub tab_title: String,
}

impl StatusSegment for MailStatusSegment {
    fn content(&self) -> String {
        if self.unread_count > 0 {
            format!(
                "Mail: {} unread / {} [{}]",
                self.unread_count, self.total_count, self.tab_title
            )
        } else {
            format!("Mail: {} [{}]", self.total_count, self.tab_title)
        }
    }

    fn min_width(&self) -> u16 {
        18
    }

    fn priority(&self) -> u8 {
        90
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        if self.unread_count > 0 {
            Some(
                Style::default()
                    .fg(theme.colors.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            None
        }
    }
}

/// The highlighted navigation link while the rail is collapsed. Carries the
/// badge that the icon-only rail has no room for.
#[derive(Debug, Clone)]
pub struct NavBadgeSegment {
    pub label: String,
    pub badge: Option<u32>,
    pub rail_collapsed: bool,
}

impl StatusSegment for NavBadgeSegment {
    fn content(&self) -> String {
        match self.badge {
            Some(count) => format!("{} ({})", self.label, count),
            None => self.label.clone(),
        }
    }

    fn min_width(&self) -> u16 {
        10
    }

    fn priority(&self) -> u8 {
        70
    }

    fn is_visible(&self) -> bool {
        self.rail_collapsed && !self.label.is_empty()
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        Some(Style::default().fg(theme.colors.nav.badge))
    }
}

/// Key hints for the focused pane.
#[derive(Debug, Clone)]
pub struct NavigationHintsSegment {
    pub current_pane: String,
    pub available_shortcuts: Vec<(String, String)>,
}

impl StatusSegment for NavigationHintsSegment {
    fn content(&self) -> String {
        let hints: Vec<String> = self
            .available_shortcuts
            .iter()
            .take(3)
            .map(|(key, description)| format!("{}:{}", key, description))
            .collect();
        format!("{} | {}", self.current_pane, hints.join(" "))
    }

    fn min_width(&self) -> u16 {
        24
    }

    fn priority(&self) -> u8 {
        40
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        Some(Style::default().fg(theme.colors.palette.text_muted))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeparatorStyle {
    Simple,  // |
    Minimal, // space
}

/// One-row status bar assembled from priority-ordered segments.
pub struct StatusBar {
    segments: HashMap<String, Box<dyn StatusSegment>>,
    segment_order: Vec<String>,
    separator_style: SeparatorStyle,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            segments: HashMap::new(),
            segment_order: Vec::new(),
            separator_style: SeparatorStyle::Simple,
        }
    }

    pub fn add_segment<T: StatusSegment + 'static>(&mut self, name: String, segment: T) {
        self.segments.insert(name.clone(), Box::new(segment));
        if !self.segment_order.contains(&name) {
            // Insert in priority order
            let priority = self.segments[&name].priority();
            let insert_pos = self
                .segment_order
                .iter()
                .position(|existing| self.segments[existing].priority() < priority)
                .unwrap_or(self.segment_order.len());
            self.segment_order.insert(insert_pos, name);
        }
    }

    pub fn remove_segment(&mut self, name: &str) {
        self.segments.remove(name);
        self.segment_order.retain(|n| n != name);
    }

    pub fn set_separator_style(&mut self, style: SeparatorStyle) {
        self.separator_style = style;
    }

    pub fn segment_names(&self) -> &[String] {
        &self.segment_order
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }

        let visible_segments: Vec<&Box<dyn StatusSegment>> = self
            .segment_order
            .iter()
            .filter_map(|name| self.segments.get(name))
            .filter(|segment| segment.is_visible())
            .collect();

        if visible_segments.is_empty() {
            return;
        }

        let separator_width = self.separator_width();
        let mut remaining = area.width;
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        remaining = remaining.saturating_sub(1);

        for (i, segment) in visible_segments.iter().enumerate() {
            // Segments that no longer fit are dropped from the tail.
            let needed = segment.min_width() + if i > 0 { separator_width } else { 0 };
            if remaining < needed {
                break;
            }

            if i > 0 {
                spans.push(self.separator(theme));
                remaining = remaining.saturating_sub(separator_width);
            }

            let content = segment.content();
            remaining = remaining.saturating_sub(content.chars().count() as u16);
            let style = segment
                .custom_style(theme)
                .unwrap_or_else(|| Style::default().fg(theme.colors.status_bar.text));
            spans.push(Span::styled(content, style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .style(Style::default().bg(theme.colors.status_bar.background));
        frame.render_widget(paragraph, area);
    }

    fn separator_width(&self) -> u16 {
        match self.separator_style {
            SeparatorStyle::Simple => 3,
            SeparatorStyle::Minimal => 2,
        }
    }

    fn separator(&self, theme: &Theme) -> Span {
        let text = match self.separator_style {
            SeparatorStyle::Simple => " | ",
            SeparatorStyle::Minimal => "  ",
        };
        Span::styled(
            text,
            Style::default().fg(theme.colors.status_bar.section_separator),
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
