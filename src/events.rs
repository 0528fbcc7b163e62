use crate::keyboard::{KeyboardAction, KeyboardManager};
use crate::ui::{FocusedPane, MailView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct EventHandler {
    keyboard_manager: KeyboardManager,
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            keyboard_manager: KeyboardManager::default(),
        }
    }

    pub fn with_keyboard_manager(keyboard_manager: KeyboardManager) -> Self {
        Self { keyboard_manager }
    }

    /// Handle a key event using the configurable keyboard system
    pub fn handle_key_event(&mut self, key: KeyEvent, view: &mut MailView) -> EventResult {
        // Text input wins over bindings while the search field is being edited
        if self.handle_text_input_modes(key, view) {
            return EventResult::Continue;
        }

        if let Some(action) = self.keyboard_manager.get_action(key.code, key.modifiers) {
            return self.execute_keyboard_action(*action, view);
        }

        EventResult::Continue
    }

    /// Handle search input for the message list. Returns true when the key
    /// was consumed as text.
    fn handle_text_input_modes(&mut self, key: KeyEvent, view: &mut MailView) -> bool {
        if view.focused_pane() == FocusedPane::MessageList
            && view.message_list().is_search_active()
        {
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    view.message_list_mut().push_search_char(c);
                    return true;
                }
                KeyCode::Backspace => {
                    view.message_list_mut().pop_search_char();
                    return true;
                }
                KeyCode::Enter => {
                    view.message_list_mut().end_search();
                    return true;
                }
                _ => {}
            }
        }

        false
    }

    fn execute_keyboard_action(
        &mut self,
        action: KeyboardAction,
        view: &mut MailView,
    ) -> EventResult {
        match action {
            KeyboardAction::Quit | KeyboardAction::ForceQuit => EventResult::Quit,

            KeyboardAction::NextPane => {
                view.next_pane();
                EventResult::Continue
            }
            KeyboardAction::PreviousPane => {
                view.previous_pane();
                EventResult::Continue
            }
            KeyboardAction::MoveUp => {
                view.handle_up();
                EventResult::Continue
            }
            KeyboardAction::MoveDown => {
                view.handle_down();
                EventResult::Continue
            }
            KeyboardAction::MoveLeft => {
                view.previous_pane();
                EventResult::Continue
            }
            KeyboardAction::MoveRight => {
                view.next_pane();
                EventResult::Continue
            }

            KeyboardAction::Select => {
                view.handle_select();
                EventResult::Continue
            }
            KeyboardAction::Escape => {
                view.handle_escape();
                EventResult::Continue
            }

            KeyboardAction::ToggleUnreadFilter => {
                view.toggle_unread_tab();
                EventResult::Continue
            }
            KeyboardAction::StartSearch => {
                if view.focused_pane() == FocusedPane::MessageList {
                    view.message_list_mut().start_search();
                }
                EventResult::Continue
            }

            KeyboardAction::ScrollToTop => {
                view.scroll_to_top();
                EventResult::Continue
            }
            KeyboardAction::ScrollToBottom => {
                view.scroll_to_bottom();
                EventResult::Continue
            }

            KeyboardAction::ShrinkNavPane => {
                view.shrink_nav_pane();
                EventResult::Continue
            }
            KeyboardAction::GrowNavPane => {
                view.grow_nav_pane();
                EventResult::Continue
            }
            KeyboardAction::ToggleNavPane => {
                view.toggle_nav_pane();
                EventResult::Continue
            }
            KeyboardAction::ShrinkListPane => {
                view.shrink_list_pane();
                EventResult::Continue
            }
            KeyboardAction::GrowListPane => {
                view.grow_list_pane();
                EventResult::Continue
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeManager;
    use crate::ui::{HintStore, ViewOptions};
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

    fn press(handler: &mut EventHandler, view: &mut MailView, code: KeyCode) -> EventResult {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), view)
    }

    #[test]
    fn test_quit_keys() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        assert_eq!(press(&mut handler, &mut view, KeyCode::Char('q')), EventResult::Quit);
        assert_eq!(
            handler.handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut view
            ),
            EventResult::Quit
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        assert_eq!(view.focused_pane(), FocusedPane::MessageList);
        press(&mut handler, &mut view, KeyCode::Tab);
        assert_eq!(view.focused_pane(), FocusedPane::Reader);
        press(&mut handler, &mut view, KeyCode::BackTab);
        assert_eq!(view.focused_pane(), FocusedPane::MessageList);
    }

    #[test]
    fn test_search_text_entry_and_escape() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut view, KeyCode::Char('/'));
        assert!(view.message_list().is_search_active());

        press(&mut handler, &mut view, KeyCode::Char('a'));
        press(&mut handler, &mut view, KeyCode::Char('b'));
        assert_eq!(view.message_list().search_query(), "ab");

        // While editing, binding keys are text
        press(&mut handler, &mut view, KeyCode::Char('q'));
        assert_eq!(view.message_list().search_query(), "abq");

        press(&mut handler, &mut view, KeyCode::Esc);
        assert!(!view.message_list().is_search_active());
        assert_eq!(view.message_list().search_query(), "");
    }

    #[test]
    fn test_ctrl_c_quits_during_search() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut view, KeyCode::Char('/'));
        let result = handler.handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut view,
        );
        assert_eq!(result, EventResult::Quit);
    }

    #[test]
    fn test_unread_toggle_binding() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        let before = view.message_list().visible_len();
        press(&mut handler, &mut view, KeyCode::Char('u'));
        assert!(view.message_list().visible_len() < before);
        press(&mut handler, &mut view, KeyCode::Char('u'));
        assert_eq!(view.message_list().visible_len(), before);
    }

    #[test]
    fn test_repeated_shrink_collapses_nav() {
        let (mut view, _dir) = view();
        let mut handler = EventHandler::new();

        for _ in 0..6 {
            press(&mut handler, &mut view, KeyCode::Char('['));
        }
        assert!(view.layout().is_collapsed());

        press(&mut handler, &mut view, KeyCode::Char(']'));
        assert!(!view.layout().is_collapsed());
    }
}
