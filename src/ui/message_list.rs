use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::mail::{format_relative_time, Message};
use crate::theme::Theme;

/// Which tab of the list pane is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTab {
    All,
    Unread,
}

impl ListTab {
    pub fn title(&self) -> &'static str {
        match self {
            ListTab::All => "All",
            ListTab::Unread => "Unread",
        }
    }
}

/// The tabbed message list pane.
///
/// Visible rows are a projection over the collection: "All" shows every
/// message, "Unread" only those with `read == false`, both in input order.
/// The stored selection id survives tab switches even while the selected
/// message is hidden from view.
pub struct MessageList {
    messages: Vec<Message>,
    tab: ListTab,
    visible: Vec<usize>,
    state: ListState,
    selected_id: Option<Uuid>,
    search_query: String,
    search_active: bool,
}

impl MessageList {
    pub fn new(messages: Vec<Message>) -> Self {
        let mut list = Self {
            messages,
            tab: ListTab::All,
            visible: Vec::new(),
            state: ListState::default(),
            selected_id: None,
            search_query: String::new(),
            search_active: false,
        };
        list.rebuild_visible();
        list.selected_id = list.visible.first().map(|&i| list.messages[i].id);
        list
    }

    pub fn tab(&self) -> ListTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ListTab) {
        if self.tab != tab {
            self.tab = tab;
            self.rebuild_visible();
        }
    }

    pub fn toggle_tab(&mut self) {
        let next = match self.tab {
            ListTab::All => ListTab::Unread,
            ListTab::Unread => ListTab::All,
        };
        self.set_tab(next);
    }

    /// Recompute the view for the active tab, preserving input order.
    fn rebuild_visible(&mut self) {
        self.visible = self
            .messages
            .iter()
            .enumerate()
            .filter(|(_, m)| match self.tab {
                ListTab::All => true,
                ListTab::Unread => !m.read,
            })
            .map(|(i, _)| i)
            .collect();

        // The cursor follows the selection while it is still visible.
        let cursor = self
            .selected_id
            .and_then(|id| self.position_of(id))
            .or(if self.visible.is_empty() { None } else { Some(0) });
        self.state.select(cursor);
    }

    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.visible.iter().position(|&i| self.messages[i].id == id)
    }

    /// Messages in the current view, in input order.
    pub fn visible_messages(&self) -> Vec<&Message> {
        self.visible.iter().map(|&i| &self.messages[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn handle_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Select the row under the cursor, returning its id.
    ///
    /// Rows exist only for the current view, so a hidden message can never
    /// be selected from here.
    pub fn select_under_cursor(&mut self) -> Option<Uuid> {
        let cursor = self.state.selected()?;
        let message_index = *self.visible.get(cursor)?;
        let id = self.messages[message_index].id;
        self.selected_id = Some(id);
        Some(id)
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected_id
    }

    /// Resolve the stored selection against the current view.
    ///
    /// A selection hidden by the active tab resolves to `None`; the stored
    /// id itself is untouched.
    pub fn selected_in_view(&self) -> Option<&Message> {
        let id = self.selected_id?;
        self.visible
            .iter()
            .map(|&i| &self.messages[i])
            .find(|m| m.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn total_count(&self) -> usize {
        self.messages.len()
    }

    // Search input. The query is displayed but does not drive the view.
    // TODO: feed the query into the visible-row projection.

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    pub fn end_search(&mut self) {
        self.search_active = false;
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn push_search_char(&mut self, c: char) {
        if self.search_active {
            self.search_query.push(c);
        }
    }

    pub fn pop_search_char(&mut self) {
        if self.search_active {
            self.search_query.pop();
        }
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_active = false;
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
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_tabs(frame, rows[0], theme);
        self.render_search(frame, rows[1], is_focused, theme);
        self.render_rows(frame, rows[2], is_focused, theme);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let colors = &theme.colors.message_list;
        let tab_span = |tab: ListTab| {
            if self.tab == tab {
                Span::styled(
                    format!(" {} ", tab.title()),
                    Style::default()
                        .fg(colors.tab_active)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(
                    format!(" {} ", tab.title()),
                    Style::default().fg(colors.tab_inactive),
                )
            }
        };

        let line = Line::from(vec![
            tab_span(ListTab::All),
            Span::raw(" "),
            tab_span(ListTab::Unread),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, is_focused: bool, theme: &Theme) {
        let line = if self.search_active {
            Line::from(vec![
                Span::styled(" / ", theme.get_component_style("input", true)),
                Span::styled(
                    self.search_query.clone(),
                    theme.get_component_style("input", true),
                ),
                Span::styled("█", theme.get_component_style("input", is_focused)),
            ])
        } else if self.search_query.is_empty() {
            Line::from(Span::styled(
                " / Search",
                theme.get_component_style("muted", false),
            ))
        } else {
            Line::from(vec![
                Span::styled(" / ", theme.get_component_style("muted", false)),
                Span::styled(
                    self.search_query.clone(),
                    theme.get_component_style("input", false),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_rows(&mut self, frame: &mut Frame, area: Rect, is_focused: bool, theme: &Theme) {
        if self.visible.is_empty() {
            let placeholder = match self.tab {
                ListTab::All => " No messages",
                ListTab::Unread => " No unread messages",
            };
            frame.render_widget(
                Paragraph::new(placeholder).style(theme.get_component_style("muted", false)),
                area,
            );
            return;
        }

        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&i| self.message_item(&self.messages[i], width, theme))
            .collect();

        let list = List::new(items)
            .highlight_style(theme.get_component_style("selection", is_focused));
        frame.render_stateful_widget(list, area, &mut self.state);
    }

    fn message_item(&self, message: &Message, width: usize, theme: &Theme) -> ListItem<'static> {
        let colors = &theme.colors.message_list;

        let (indicator, sender_style) = if message.read {
            ("  ", Style::default().fg(colors.sender_read))
        } else {
            (
                "● ",
                Style::default()
                    .fg(colors.sender_unread)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let date = format_relative_time(message.timestamp);
        let sender = truncate(
            message.sender.display(),
            width.saturating_sub(date.chars().count() + 4),
        );
        let pad = width.saturating_sub(2 + sender.chars().count() + date.chars().count() + 1);

        let top = Line::from(vec![
            Span::styled(
                indicator,
                Style::default().fg(colors.unread_indicator),
            ),
            Span::styled(sender, sender_style),
            Span::raw(" ".repeat(pad)),
            Span::styled(date, Style::default().fg(colors.date)),
        ]);

        let mut subject_spans = vec![Span::styled(
            format!("  {}", truncate(&message.subject, width.saturating_sub(2))),
            Style::default().fg(colors.subject),
        )];
        for label in &message.labels {
            subject_spans.push(Span::styled(
                format!(" [{}]", label),
                Style::default().fg(colors.label_chip),
            ));
        }

        let preview = Line::from(Span::styled(
            format!("  {}", truncate(&message.preview, width.saturating_sub(2))),
            Style::default().fg(colors.preview),
        ));

        ListItem::new(vec![top, Line::from(subject_spans), preview])
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else if max <= 3 {
        text.chars().take(max).collect()
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::{Address, Message};
    use chrono::Utc;

    fn collection() -> Vec<Message> {
        vec![
            Message::new(
                Address::new("One", "one@example.com"),
                "first",
                "body",
                Utc::now(),
            )
            .unread(),
            Message::new(
                Address::new("Two", "two@example.com"),
                "second",
                "body",
                Utc::now(),
            ),
            Message::new(
                Address::new("Three", "three@example.com"),
                "third",
                "body",
                Utc::now(),
            )
            .unread(),
        ]
    }

    #[test]
    fn test_initial_selection_is_first_message() {
        let list = MessageList::new(collection());
        let first = list.visible_messages()[0].id;
        assert_eq!(list.selected_id(), Some(first));
    }

    #[test]
    fn test_unread_tab_filters_in_order() {
        let mut list = MessageList::new(collection());
        list.set_tab(ListTab::Unread);
        let subjects: Vec<&str> = list
            .visible_messages()
            .iter()
            .map(|m| m.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["first", "third"]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut list = MessageList::new(collection());
        assert_eq!(list.cursor(), Some(0));
        list.handle_up();
        assert_eq!(list.cursor(), Some(2));
        list.handle_down();
        assert_eq!(list.cursor(), Some(0));
    }

    #[test]
    fn test_search_query_collects_input_without_filtering() {
        let mut list = MessageList::new(collection());
        list.start_search();
        list.push_search_char('f');
        list.push_search_char('i');
        assert_eq!(list.search_query(), "fi");
        assert_eq!(list.visible_len(), 3);
        list.pop_search_char();
        assert_eq!(list.search_query(), "f");
        list.end_search();
        assert!(!list.is_search_active());
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("short", 8), "short");
    }
}
