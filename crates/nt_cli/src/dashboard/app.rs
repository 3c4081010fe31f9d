use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const CARD_WIDTH: u16 = 42;
pub const CARD_HEIGHT: u16 = 9;
pub const MAX_COLUMNS: u16 = 3;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reload,
    ScrollUp,
    ScrollDown,
    None,
}

pub fn translate_key(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::F(5) => Action::Reload,
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
        _ => Action::None,
    }
}

/// Terminal-only state. The view itself lives in the controller.
#[derive(Debug, Default)]
pub struct App {
    /// First visible row of cards.
    pub scroll: usize,
    pub ticks: usize,
}

impl App {
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.ticks % SPINNER.len()]
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if self.scroll + 1 < rows {
            self.scroll += 1;
        }
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).clamp(1, MAX_COLUMNS) as usize
}

pub fn rows_for(cards: usize, columns: usize) -> usize {
    (cards + columns - 1) / columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(translate_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(translate_key(press(KeyCode::Char('r'))), Action::Reload);
        assert_eq!(translate_key(press(KeyCode::Down)), Action::ScrollDown);
        assert_eq!(translate_key(press(KeyCode::Char('k'))), Action::ScrollUp);
        assert_eq!(translate_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut app = App::default();
        app.scroll_up();
        assert_eq!(app.scroll, 0);

        for _ in 0..10 {
            app.scroll_down(3);
        }
        assert_eq!(app.scroll, 2);

        app.reset();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_spinner_cycles() {
        let mut app = App::default();
        let first = app.spinner();
        app.tick();
        assert_ne!(app.spinner(), first);
        for _ in 0..9 {
            app.tick();
        }
        assert_eq!(app.spinner(), first);
    }

    #[test]
    fn test_grid_geometry() {
        assert_eq!(columns_for(20), 1);
        assert_eq!(columns_for(90), 2);
        assert_eq!(columns_for(400), 3);
        assert_eq!(rows_for(0, 3), 0);
        assert_eq!(rows_for(4, 3), 2);
        assert_eq!(rows_for(3, 1), 3);
    }
}
