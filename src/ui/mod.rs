pub mod account_switcher;
pub mod hints;
pub mod layout;
pub mod message_list;
pub mod nav;
pub mod reader;
pub mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

use crate::keyboard::{KeyboardAction, KeyboardManager};
use crate::mail::{sample_accounts, sample_messages, Account, Message};
use crate::theme::ThemeManager;

pub use account_switcher::AccountSwitcher;
pub use hints::{HintStore, LayoutHints};
pub use layout::{PaneLayout, DEFAULT_RATIOS, NAV_COLLAPSED_SIZE};
pub use message_list::{ListTab, MessageList};
pub use nav::NavPane;
pub use reader::Reader;
pub use status_bar::{
    MailStatusSegment, NavBadgeSegment, NavigationHintsSegment, StatusBar, StatusSegment,
};

/// Which pane currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    AccountSwitcher,
    Nav,
    MessageList,
    Reader,
}

impl FocusedPane {
    fn title(&self) -> &'static str {
        match self {
            FocusedPane::AccountSwitcher => "Accounts",
            FocusedPane::Nav => "Folders",
            FocusedPane::MessageList => "Messages",
            FocusedPane::Reader => "Reader",
        }
    }
}

/// Construction inputs for [`MailView`].
///
/// Everything has a default: the sample collection, the standard ratios,
/// an expanded navigation pane.
pub struct ViewOptions {
    pub accounts: Vec<Account>,
    pub messages: Vec<Message>,
    pub default_layout: [u16; 3],
    pub default_collapsed: bool,
    pub nav_collapsed_size: u16,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            accounts: sample_accounts(),
            messages: sample_messages(),
            default_layout: DEFAULT_RATIOS,
            default_collapsed: false,
            nav_collapsed_size: NAV_COLLAPSED_SIZE,
        }
    }
}

/// The three-pane view and the shared state its panes read.
///
/// Owns the collapse/layout state and the selection; child panes receive
/// what they need at render time.
pub struct MailView {
    focused_pane: FocusedPane,
    layout: PaneLayout,
    hints: HintStore,
    theme_manager: ThemeManager,
    keyboard: KeyboardManager,
    account_switcher: AccountSwitcher,
    nav: NavPane,
    message_list: MessageList,
    reader: Reader,
    status_bar: StatusBar,
}

impl MailView {
    pub fn new(
        options: ViewOptions,
        theme_manager: ThemeManager,
        hints: HintStore,
        keyboard: KeyboardManager,
    ) -> Self {
        let layout = PaneLayout::new(
            options.default_layout,
            options.default_collapsed,
            options.nav_collapsed_size,
        );

        let mut view = Self {
            focused_pane: FocusedPane::MessageList,
            layout,
            hints,
            theme_manager,
            keyboard,
            account_switcher: AccountSwitcher::new(options.accounts),
            nav: NavPane::new(),
            message_list: MessageList::new(options.messages),
            reader: Reader::new(),
            status_bar: StatusBar::new(),
        };

        let collapsed = view.layout.is_collapsed();
        view.nav.set_collapsed(collapsed);
        view.account_switcher.set_collapsed(collapsed);
        view.sync_reader();
        view
    }

    pub fn focused_pane(&self) -> FocusedPane {
        self.focused_pane
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    pub fn message_list(&self) -> &MessageList {
        &self.message_list
    }

    pub fn message_list_mut(&mut self) -> &mut MessageList {
        &mut self.message_list
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }

    pub fn next_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::AccountSwitcher => FocusedPane::Nav,
            FocusedPane::Nav => FocusedPane::MessageList,
            FocusedPane::MessageList => FocusedPane::Reader,
            FocusedPane::Reader => FocusedPane::AccountSwitcher,
        };
    }

    pub fn previous_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::AccountSwitcher => FocusedPane::Reader,
            FocusedPane::Nav => FocusedPane::AccountSwitcher,
            FocusedPane::MessageList => FocusedPane::Nav,
            FocusedPane::Reader => FocusedPane::MessageList,
        };
    }

    pub fn handle_up(&mut self) {
        match self.focused_pane {
            FocusedPane::AccountSwitcher => self.account_switcher.previous_account(),
            FocusedPane::Nav => self.nav.handle_up(),
            FocusedPane::MessageList => self.message_list.handle_up(),
            FocusedPane::Reader => self.reader.scroll_up(),
        }
    }

    pub fn handle_down(&mut self) {
        match self.focused_pane {
            FocusedPane::AccountSwitcher => self.account_switcher.next_account(),
            FocusedPane::Nav => self.nav.handle_down(),
            FocusedPane::MessageList => self.message_list.handle_down(),
            FocusedPane::Reader => self.reader.scroll_down(),
        }
    }

    pub fn handle_select(&mut self) {
        match self.focused_pane {
            FocusedPane::AccountSwitcher => self.account_switcher.next_account(),
            FocusedPane::Nav => self.nav.handle_select(),
            FocusedPane::MessageList => {
                self.message_list.select_under_cursor();
                self.sync_reader();
            }
            FocusedPane::Reader => {}
        }
    }

    pub fn handle_escape(&mut self) {
        if self.message_list.is_search_active() {
            self.message_list.clear_search();
        }
    }

    pub fn toggle_unread_tab(&mut self) {
        self.message_list.toggle_tab();
        self.sync_reader();
    }

    pub fn scroll_to_top(&mut self) {
        if self.focused_pane == FocusedPane::Reader {
            self.reader.scroll_to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.focused_pane == FocusedPane::Reader {
            self.reader.scroll_to_bottom();
        }
    }

    pub fn shrink_nav_pane(&mut self) {
        self.layout.shrink_nav();
        self.after_layout_change();
    }

    pub fn grow_nav_pane(&mut self) {
        self.layout.grow_nav();
        self.after_layout_change();
    }

    pub fn toggle_nav_pane(&mut self) {
        self.layout.toggle_nav();
        self.after_layout_change();
    }

    pub fn shrink_list_pane(&mut self) {
        self.layout.shrink_list();
        self.after_layout_change();
    }

    pub fn grow_list_pane(&mut self) {
        self.layout.grow_list();
        self.after_layout_change();
    }

    /// Propagate collapse state to the left column and mirror the layout
    /// into the hint store. Hint failures are advisory only.
    fn after_layout_change(&mut self) {
        let collapsed = self.layout.is_collapsed();
        self.nav.set_collapsed(collapsed);
        self.account_switcher.set_collapsed(collapsed);

        let snapshot = LayoutHints {
            layout: self.layout.ratios(),
            collapsed,
        };
        if let Err(err) = self.hints.save(&snapshot) {
            tracing::warn!("could not mirror layout hints: {}", err);
        }
    }

    /// Resolve the selection against the current view and project it into
    /// the reader. A filtered-out selection shows the empty state.
    fn sync_reader(&mut self) {
        self.reader.show_message(self.message_list.selected_in_view());
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.size();
        self.refresh_status();

        let chunks = self.layout.calculate_layout(size);

        self.render_left_column(frame, chunks[0]);
        self.render_message_list(frame, chunks[1]);
        self.render_reader(frame, chunks[2]);

        if chunks.len() > 3 {
            let theme = self.theme_manager.current_theme();
            self.status_bar.render(frame, chunks[3], theme);
        }
    }

    fn render_left_column(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_account_switcher(frame, rows[0]);
        self.render_nav(frame, rows[1]);
    }

    fn render_account_switcher(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::AccountSwitcher);
        let theme = self.theme_manager.current_theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused));

        self.account_switcher
            .render(frame, area, block, is_focused, theme);
    }

    fn render_nav(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::Nav);
        let theme = self.theme_manager.current_theme();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused));
        if !self.layout.is_collapsed() {
            block = block.title("Folders");
        }

        self.nav.render(frame, area, block, is_focused, theme);
    }

    fn render_message_list(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::MessageList);
        let theme = self.theme_manager.current_theme();

        let block = Block::default()
            .title("Inbox")
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused));

        self.message_list
            .render(frame, area, block, is_focused, theme);
    }

    fn render_reader(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::Reader);
        let theme = self.theme_manager.current_theme();

        let title = match self.reader.scroll_percent() {
            Some(percent) => format!("Message ({}%)", percent),
            None => "Message".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused));

        self.reader.render(frame, area, block, is_focused, theme);
    }

    fn refresh_status(&mut self) {
        self.status_bar.add_segment(
            "mail".to_string(),
            MailStatusSegment {
                unread_count: self.message_list.unread_count(),
                total_count: self.message_list.total_count(),
                tab_title: self.message_list.tab().title().to_string(),
            },
        );

        let (label, badge) = match self.nav.highlighted() {
            Some(link) => (link.label.clone(), link.badge),
            None => (String::new(), None),
        };
        self.status_bar.add_segment(
            "nav-badge".to_string(),
            NavBadgeSegment {
                label,
                badge,
                rail_collapsed: self.layout.is_collapsed()
                    && matches!(self.focused_pane, FocusedPane::Nav),
            },
        );

        self.status_bar.add_segment(
            "hints".to_string(),
            NavigationHintsSegment {
                current_pane: self.focused_pane.title().to_string(),
                available_shortcuts: self.pane_shortcuts(),
            },
        );
    }

    /// Hint pairs for the focused pane. Keys are resolved from the active
    /// bindings, so the status bar follows keyboard.toml rebindings.
    fn pane_shortcuts(&self) -> Vec<(String, String)> {
        let pairs: &[(KeyboardAction, &str)] = match self.focused_pane {
            FocusedPane::AccountSwitcher => &[
                (KeyboardAction::MoveDown, "switch"),
                (KeyboardAction::NextPane, "next pane"),
            ],
            FocusedPane::Nav => &[
                (KeyboardAction::MoveDown, "move"),
                (KeyboardAction::Select, "open"),
                (KeyboardAction::ToggleNavPane, "rail"),
            ],
            FocusedPane::MessageList => &[
                (KeyboardAction::MoveDown, "move"),
                (KeyboardAction::Select, "read"),
                (KeyboardAction::ToggleUnreadFilter, "unread"),
            ],
            FocusedPane::Reader => &[
                (KeyboardAction::MoveDown, "scroll"),
                (KeyboardAction::ScrollToTop, "jump"),
            ],
        };

        pairs
            .iter()
            .map(|&(action, label)| (self.action_keys(action), label.to_string()))
            .collect()
    }

    /// Display form of an action's binding. Movement and jump actions render
    /// as their natural pairs ("j/k", "Home/End").
    fn action_keys(&self, action: KeyboardAction) -> String {
        match action {
            KeyboardAction::MoveDown => format!(
                "{}/{}",
                self.first_binding(KeyboardAction::MoveDown),
                self.first_binding(KeyboardAction::MoveUp)
            ),
            KeyboardAction::ScrollToTop => format!(
                "{}/{}",
                self.first_binding(KeyboardAction::ScrollToTop),
                self.first_binding(KeyboardAction::ScrollToBottom)
            ),
            other => self.first_binding(other),
        }
    }

    fn first_binding(&self, action: KeyboardAction) -> String {
        self.keyboard
            .config()
            .shortcuts_for_action(action)
            .first()
            .map(|shortcut| shortcut.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyboardConfig, KeyboardShortcut};
    use crossterm::event::KeyCode;
    use tempfile::TempDir;

    fn view() -> (MailView, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        let view = MailView::new(
            ViewOptions::default(),
            ThemeManager::new(),
            store,
            KeyboardManager::default(),
        );
        (view, dir)
    }

    #[test]
    fn test_focus_cycle_round_trip() {
        let (mut view, _dir) = view();
        assert_eq!(view.focused_pane(), FocusedPane::MessageList);
        view.next_pane();
        assert_eq!(view.focused_pane(), FocusedPane::Reader);
        view.next_pane();
        assert_eq!(view.focused_pane(), FocusedPane::AccountSwitcher);
        view.previous_pane();
        assert_eq!(view.focused_pane(), FocusedPane::Reader);
    }

    #[test]
    fn test_initial_selection_reaches_reader() {
        let (view, _dir) = view();
        assert!(!view.reader().is_empty());
    }

    #[test]
    fn test_layout_change_mirrors_hints() {
        let (mut view, _dir) = view();
        view.toggle_nav_pane();
        let saved = view.hints.load().unwrap();
        assert!(saved.collapsed);
        assert_eq!(saved.layout, view.layout().ratios());
    }

    #[test]
    fn test_default_hints_show_default_keys() {
        let (view, _dir) = view();
        assert_eq!(
            view.pane_shortcuts(),
            vec![
                ("j/k".to_string(), "move".to_string()),
                ("Enter".to_string(), "read".to_string()),
                ("u".to_string(), "unread".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_hints_follow_rebinding() {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        let mut config = KeyboardConfig::default();
        config.set_shortcut(
            KeyboardShortcut::simple(KeyCode::Char('f')),
            KeyboardAction::ToggleUnreadFilter,
        );
        let view = MailView::new(
            ViewOptions::default(),
            ThemeManager::new(),
            store,
            KeyboardManager::with_config(config),
        );

        let hints = view.pane_shortcuts();
        assert!(hints.contains(&("f".to_string(), "unread".to_string())));
    }

    #[test]
    fn test_unread_toggle_resyncs_reader() {
        let (mut view, _dir) = view();
        // Walk the cursor to a read message and select it.
        while view
            .message_list()
            .visible_messages()
            .get(view.message_list().cursor().unwrap())
            .map(|m| !m.read)
            .unwrap_or(false)
        {
            view.handle_down();
        }
        view.handle_select();
        assert!(!view.reader().is_empty());

        view.toggle_unread_tab();
        assert!(view.reader().is_empty());
        assert!(view.message_list().selected_id().is_some());
    }
}
