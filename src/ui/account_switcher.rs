use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::mail::Account;
use crate::theme::Theme;

/// The current-account strip above the navigation links.
///
/// Accounts are display only; the switcher cycles which one is shown as
/// current.
pub struct AccountSwitcher {
    accounts: Vec<Account>,
    current: usize,
    collapsed: bool,
}

impl AccountSwitcher {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            current: 0,
            collapsed: false,
        }
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.accounts.get(self.current)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn next_account(&mut self) {
        if !self.accounts.is_empty() {
            self.current = (self.current + 1) % self.accounts.len();
        }
    }

    pub fn previous_account(&mut self) {
        if !self.accounts.is_empty() {
            self.current = if self.current == 0 {
                self.accounts.len() - 1
            } else {
                self.current - 1
            };
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        block: Block,
        is_focused: bool,
        theme: &Theme,
    ) {
        let inner = block.inner(area);
        let palette = &theme.colors.palette;

        let line = match self.current_account() {
            None => Line::from(Span::styled(
                " no accounts",
                Style::default().fg(palette.text_muted),
            )),
            Some(account) if self.collapsed => Line::from(Span::styled(
                format!(" {} ", account.icon),
                Style::default().fg(palette.accent),
            )),
            Some(account) => {
                let label_style = if is_focused {
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text_primary)
                };

                let mut spans = vec![
                    Span::styled(
                        format!(" {} ", account.icon),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(account.label.clone(), label_style),
                ];

                // Address and position indicator when the strip is wide enough.
                let email = format!(" {}", account.email);
                let indicator = if self.accounts.len() > 1 {
                    format!("{}/{}", self.current + 1, self.accounts.len())
                } else {
                    String::new()
                };
                let used = 3 + account.label.chars().count()
                    + email.chars().count()
                    + indicator.chars().count()
                    + 1;
                if (inner.width as usize) > used {
                    spans.push(Span::styled(email, Style::default().fg(palette.text_muted)));
                    if !indicator.is_empty() {
                        let pad = (inner.width as usize).saturating_sub(used);
                        spans.push(Span::raw(" ".repeat(pad)));
                        spans.push(Span::styled(
                            indicator,
                            Style::default().fg(palette.text_muted),
                        ));
                    }
                }

                Line::from(spans)
            }
        };

        let paragraph = Paragraph::new(line).block(block);
        frame.render_widget(paragraph, area);
    }
}
