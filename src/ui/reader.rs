use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use regex::Regex;

use crate::mail::Message;
use crate::theme::Theme;

/// Snapshot of the message being shown.
#[derive(Debug, Clone)]
struct ReaderContent {
    sender_name: String,
    sender_email: String,
    subject: String,
    date: String,
    labels: Vec<String>,
    body_lines: Vec<String>,
    links: Vec<String>,
}

/// The reader pane: header fields plus a scrollable body, or an empty
/// state when nothing resolves from the selection.
pub struct Reader {
    content: Option<ReaderContent>,
    scroll: u16,
    url_regex: Regex,
}

impl Reader {
    pub fn new() -> Self {
        Self {
            content: None,
            scroll: 0,
            url_regex: Regex::new(r"https?://[^\s<>)]+").unwrap(),
        }
    }

    /// Project the resolved selection into the pane. `None` shows the
    /// empty state. Purely a projection; the message is not mutated.
    pub fn show_message(&mut self, message: Option<&Message>) {
        self.scroll = 0;
        self.content = message.map(|m| ReaderContent {
            sender_name: m.sender.display().to_string(),
            sender_email: m.sender.email.clone(),
            subject: m.subject.clone(),
            date: m.timestamp.format("%a, %b %e %Y at %H:%M").to_string(),
            labels: m.labels.clone(),
            body_lines: m.body.lines().map(str::to_string).collect(),
            links: self
                .url_regex
                .find_iter(&m.body)
                .map(|mat| mat.as_str().to_string())
                .collect(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Scroll position for the pane title, present once scrolled.
    pub fn scroll_percent(&self) -> Option<u8> {
        if self.scroll == 0 || self.content.is_none() {
            return None;
        }
        let max = self.max_scroll();
        if max == 0 {
            return None;
        }
        Some(((self.scroll as u32 * 100) / max as u32) as u8)
    }

    fn max_scroll(&self) -> u16 {
        self.total_lines().saturating_sub(1)
    }

    fn total_lines(&self) -> u16 {
        match &self.content {
            None => 0,
            Some(content) => {
                let mut lines = 4 + content.body_lines.len();
                if !content.labels.is_empty() {
                    lines += 1;
                }
                if !content.links.is_empty() {
                    lines += 2 + content.links.len();
                }
                lines.min(u16::MAX as usize) as u16
            }
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        block: Block,
        _is_focused: bool,
        theme: &Theme,
    ) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.content {
            None => self.render_empty(frame, inner, theme),
            Some(content) => self.render_content(frame, inner, content, theme),
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let pad = (area.height / 2).saturating_sub(1) as usize;
        let mut lines = vec![Line::raw(""); pad];
        lines.push(Line::from(Span::styled(
            "No message selected",
            Style::default().fg(theme.colors.reader.empty),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_content(
        &self,
        frame: &mut Frame,
        area: Rect,
        content: &ReaderContent,
        theme: &Theme,
    ) {
        let colors = &theme.colors.reader;
        let label_style = Style::default()
            .fg(colors.header_label)
            .add_modifier(Modifier::BOLD);
        let value_style = Style::default().fg(colors.header_value);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("From: ", label_style),
                Span::styled(
                    format!("{} <{}>", content.sender_name, content.sender_email),
                    value_style,
                ),
            ]),
            Line::from(vec![
                Span::styled("Subject: ", label_style),
                Span::styled(content.subject.clone(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Date: ", label_style),
                Span::styled(content.date.clone(), value_style),
            ]),
        ];

        if !content.labels.is_empty() {
            let mut spans = vec![Span::styled("Labels: ", label_style)];
            for label in &content.labels {
                spans.push(Span::styled(
                    format!("[{}] ", label),
                    Style::default().fg(colors.link),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::raw(""));
        for body_line in &content.body_lines {
            lines.push(Line::from(Span::styled(
                body_line.clone(),
                Style::default().fg(colors.body),
            )));
        }

        if !content.links.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Links", label_style)));
            for link in &content.links {
                lines.push(Line::from(Span::styled(
                    format!("  {}", link),
                    Style::default().fg(colors.link),
                )));
            }
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Address;
    use chrono::{TimeZone, Utc};

    fn message() -> Message {
        Message::new(
            Address::new("Nina Holt", "nina@conf.example.org"),
            "CFP closes Friday",
            "Submit here: https://conf.example.org/cfp\n\nSee also \
             https://conf.example.org/speakers for the guidelines.",
            Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
        )
        .with_labels(&["work"])
    }

    #[test]
    fn test_starts_empty() {
        let reader = Reader::new();
        assert!(reader.is_empty());
        assert_eq!(reader.scroll_percent(), None);
    }

    #[test]
    fn test_show_message_extracts_links() {
        let mut reader = Reader::new();
        reader.show_message(Some(&message()));
        let content = reader.content.as_ref().unwrap();
        assert_eq!(
            content.links,
            vec![
                "https://conf.example.org/cfp".to_string(),
                "https://conf.example.org/speakers".to_string(),
            ]
        );
        assert_eq!(content.date, "Tue, Mar  5 2024 at 14:30");
    }

    #[test]
    fn test_clearing_returns_to_empty_state() {
        let mut reader = Reader::new();
        reader.show_message(Some(&message()));
        assert!(!reader.is_empty());
        reader.show_message(None);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut reader = Reader::new();
        reader.show_message(Some(&message()));

        reader.scroll_up();
        assert_eq!(reader.scroll, 0);

        reader.scroll_to_bottom();
        let bottom = reader.scroll;
        reader.scroll_down();
        assert_eq!(reader.scroll, bottom);
        assert_eq!(reader.scroll_percent(), Some(100));

        reader.scroll_to_top();
        assert_eq!(reader.scroll, 0);
    }

    #[test]
    fn test_new_message_resets_scroll() {
        let mut reader = Reader::new();
        reader.show_message(Some(&message()));
        reader.scroll_down();
        reader.show_message(Some(&message()));
        assert_eq!(reader.scroll, 0);
    }
}
