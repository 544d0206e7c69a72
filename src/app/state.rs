//! Keyboard-driven state for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::report::{Report, Sections};

/// Whether keystrokes edit the ticker input or drive the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Edit,
    View,
}

/// What the event loop should do after a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    /// Fetch a fresh report for the current input.
    Fetch,
    Quit,
}

pub struct App {
    pub input: String,
    pub mode: InputMode,
    pub sections: Sections,
    pub report: Option<Report>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub scroll: u16,
    /// Set when toggles changed since the last fetch.
    pub stale: bool,
}

impl App {
    pub fn new(initial: impl Into<String>, sections: Sections) -> Self {
        Self {
            input: initial.into(),
            mode: InputMode::Edit,
            sections,
            report: None,
            error: None,
            status: None,
            scroll: 0,
            stale: false,
        }
    }

    /// Applies one keypress and says what the event loop should do next.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match self.mode {
            InputMode::Edit => self.handle_edit_key(key),
            InputMode::View => self.handle_view_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Enter => {
                let trimmed = self.input.trim().to_ascii_uppercase();
                if trimmed.is_empty() {
                    self.error = Some("Enter a valid stock ticker...".to_string());
                    return AppAction::None;
                }
                self.input = trimmed;
                self.mode = InputMode::View;
                AppAction::Fetch
            }
            KeyCode::Esc => {
                self.mode = InputMode::View;
                AppAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                AppAction::None
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.input.push(c);
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.mode = InputMode::Edit;
                AppAction::None
            }
            KeyCode::Enter => AppAction::Fetch,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                AppAction::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                AppAction::None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                AppAction::None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                AppAction::None
            }
            KeyCode::Char('g') => {
                self.scroll = 0;
                AppAction::None
            }
            KeyCode::Char('a') => self.toggle(|s| &mut s.actions),
            KeyCode::Char('h') => self.toggle(|s| &mut s.holders),
            KeyCode::Char('b') => self.toggle(|s| &mut s.balance_sheet),
            KeyCode::Char('c') => self.toggle(|s| &mut s.cashflow),
            KeyCode::Char('r') => self.toggle(|s| &mut s.recommendations),
            KeyCode::Char('t') => self.toggle(|s| &mut s.ratios),
            _ => AppAction::None,
        }
    }

    fn toggle(&mut self, field: impl Fn(&mut Sections) -> &mut bool) -> AppAction {
        let flag = field(&mut self.sections);
        *flag = !*flag;
        // Enter re-fetches; until then the summary line flags the report as stale.
        self.stale = true;
        AppAction::None
    }

    pub fn set_report(&mut self, report: Report) {
        self.error = None;
        self.status = None;
        self.scroll = 0;
        self.stale = false;
        self.report = Some(report);
    }

    pub fn set_error(&mut self, message: String) {
        self.status = None;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_in_edit_mode_uppercases_and_fetches() {
        let mut app = App::new("meta", Sections::default());
        assert_eq!(app.handle_key(key(KeyCode::Enter)), AppAction::Fetch);
        assert_eq!(app.input, "META");
        assert_eq!(app.mode, InputMode::View);
    }

    #[test]
    fn empty_input_does_not_fetch() {
        let mut app = App::new("", Sections::default());
        assert_eq!(app.handle_key(key(KeyCode::Enter)), AppAction::None);
        assert!(app.error.is_some());
    }

    #[test]
    fn typing_appends_and_backspace_removes() {
        let mut app = App::new("", Sections::default());
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.input, "ab");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "a");
    }

    #[test]
    fn view_mode_toggles_mark_sections_stale() {
        let mut app = App::new("META", Sections::default());
        app.mode = InputMode::View;
        assert_eq!(app.handle_key(key(KeyCode::Char('a'))), AppAction::None);
        assert!(app.sections.actions);
        assert!(app.stale);
    }

    #[test]
    fn q_quits_only_in_view_mode() {
        let mut app = App::new("", Sections::default());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::None);
        assert_eq!(app.input, "q");

        app.mode = InputMode::View;
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::new("", Sections::default());
        let ev = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(app.handle_key(ev), AppAction::Quit);
    }
}
