use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::theme::Theme;

/// One navigation link: glyph, label, optional unread badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub icon: char,
    pub label: String,
    pub badge: Option<u32>,
}

impl NavLink {
    pub fn new(icon: char, label: impl Into<String>, badge: Option<u32>) -> Self {
        Self {
            icon,
            label: label.into(),
            badge,
        }
    }
}

/// The fixed link groups: primary folders first, category folders second.
fn default_groups() -> Vec<Vec<NavLink>> {
    vec![
        vec![
            NavLink::new('▶', "Inbox", Some(128)),
            NavLink::new('◆', "Drafts", Some(9)),
            NavLink::new('◀', "Sent", None),
            NavLink::new('⚠', "Junk", Some(23)),
            NavLink::new('×', "Trash", None),
            NavLink::new('▣', "Archive", None),
        ],
        vec![
            NavLink::new('◎', "Social", Some(972)),
            NavLink::new('○', "Updates", Some(342)),
            NavLink::new('◇', "Forums", Some(128)),
            NavLink::new('□', "Shopping", Some(8)),
            NavLink::new('▤', "Promotions", Some(21)),
        ],
    ]
}

/// The folder navigation pane: two static groups of links.
///
/// Purely presentational. The cursor and the active link only change what is
/// highlighted; they never filter the message collection.
pub struct NavPane {
    groups: Vec<Vec<NavLink>>,
    cursor: usize,
    active: usize,
    collapsed: bool,
}

impl NavPane {
    pub fn new() -> Self {
        Self {
            groups: default_groups(),
            cursor: 0,
            active: 0,
            collapsed: false,
        }
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    fn link(&self, index: usize) -> Option<&NavLink> {
        self.groups.iter().flatten().nth(index)
    }

    /// The link under the cursor.
    pub fn highlighted(&self) -> Option<&NavLink> {
        self.link(self.cursor)
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.link(self.active)
    }

    pub fn handle_up(&mut self) {
        let count = self.link_count();
        if count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            count - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn handle_down(&mut self) {
        let count = self.link_count();
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % count;
    }

    /// Mark the link under the cursor as active.
    pub fn handle_select(&mut self) {
        self.active = self.cursor;
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        block: Block,
        is_focused: bool,
        theme: &Theme,
    ) {
        let inner = block.inner(area);
        let mut items: Vec<ListItem> = Vec::new();
        let mut display_index = None;
        let mut link_index = 0usize;

        for (group_i, group) in self.groups.iter().enumerate() {
            if group_i > 0 {
                let width = inner.width as usize;
                items.push(ListItem::new(Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(theme.colors.nav.group_separator),
                ))));
            }

            for link in group {
                if link_index == self.cursor {
                    display_index = Some(items.len());
                }
                items.push(ListItem::new(self.link_line(
                    link,
                    link_index == self.active,
                    inner.width,
                    theme,
                )));
                link_index += 1;
            }
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.get_component_style("selection", is_focused));

        let mut state = ListState::default();
        if is_focused {
            state.select(display_index);
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn link_line(&self, link: &NavLink, is_active: bool, width: u16, theme: &Theme) -> Line {
        let colors = &theme.colors.nav;
        let icon_style = Style::default().fg(colors.icon);

        if self.collapsed {
            // Icon-only rail; the badge moves to the status bar.
            let style = if is_active {
                Style::default()
                    .fg(colors.link_active)
                    .add_modifier(Modifier::BOLD)
            } else {
                icon_style
            };
            return Line::from(Span::styled(format!(" {} ", link.icon), style));
        }

        let label_style = if is_active {
            Style::default()
                .fg(colors.link_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.link)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", link.icon), icon_style),
            Span::styled(link.label.clone(), label_style),
        ];

        if let Some(count) = link.badge {
            let badge = count.to_string();
            let used = 3 + link.label.chars().count() + badge.chars().count() + 1;
            let pad = (width as usize).saturating_sub(used);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(badge, Style::default().fg(colors.badge)));
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }
}

impl Default for NavPane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups_shape() {
        let nav = NavPane::new();
        assert_eq!(nav.groups.len(), 2);
        assert_eq!(nav.link_count(), 11);
        assert_eq!(nav.highlighted().unwrap().label, "Inbox");
        assert_eq!(nav.active_link().unwrap().label, "Inbox");
    }

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut nav = NavPane::new();
        nav.handle_up();
        assert_eq!(nav.highlighted().unwrap().label, "Promotions");
        nav.handle_down();
        assert_eq!(nav.highlighted().unwrap().label, "Inbox");
    }

    #[test]
    fn test_select_moves_active_link() {
        let mut nav = NavPane::new();
        nav.handle_down();
        nav.handle_select();
        assert_eq!(nav.active_link().unwrap().label, "Drafts");
    }

    #[test]
    fn test_badges_match_fixture_counts() {
        let nav = NavPane::new();
        let inbox = nav.link(0).unwrap();
        assert_eq!(inbox.badge, Some(128));
        let social = nav.link(6).unwrap();
        assert_eq!(social.badge, Some(972));
    }
}
