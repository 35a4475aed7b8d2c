//! TUI application state and logic

use crate::commands::input::{InputError, parse_length, parse_letters, parse_pattern};
use crate::core::Word;
use crate::query::{Query, QueryEngine, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which query the input box feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Pattern,
    Length,
    Contains,
}

impl SearchMode {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pattern => Self::Length,
            Self::Length => Self::Contains,
            Self::Contains => Self::Pattern,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pattern => "Pattern (use * for unknown letters)",
            Self::Length => "Word length",
            Self::Contains => "Letters that must appear",
        }
    }

    fn parse(self, input: &str) -> Result<Query, InputError> {
        match self {
            Self::Pattern => parse_pattern(input),
            Self::Length => parse_length(input),
            Self::Contains => parse_letters(input),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub engine: QueryEngine<'a>,
    pub mode: SearchMode,
    pub input_buffer: String,
    pub query: Option<Query>,
    pub results: Vec<&'a Word>,
    pub input_error: Option<InputError>,
    pub statistics: Option<Statistics>,
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: QueryEngine<'a>) -> Self {
        let statistics = engine.statistics();
        let mut app = Self {
            engine,
            mode: SearchMode::Pattern,
            input_buffer: String::new(),
            query: None,
            results: Vec::new(),
            input_error: None,
            statistics,
            messages: Vec::new(),
            scroll: 0,
            should_quit: false,
        };
        app.add_message(
            &format!("{} words loaded. Start typing to search.", engine.store().len()),
            MessageStyle::Info,
        );
        app.add_message("TAB switches between pattern, length and letters.", MessageStyle::Info);
        app
    }

    /// Re-run the query for the current mode and input
    pub fn refresh(&mut self) {
        self.scroll = 0;

        if self.input_buffer.trim().is_empty() {
            self.query = None;
            self.results.clear();
            self.input_error = None;
            return;
        }

        match self.mode.parse(&self.input_buffer) {
            Ok(query) => {
                self.results = self.engine.run(&query);
                self.query = Some(query);
                self.input_error = None;
            }
            Err(e) => {
                self.query = None;
                self.results.clear();
                self.input_error = Some(e);
            }
        }
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        self.input_buffer.clear();
        self.refresh();
        self.add_message(&format!("Mode: {}", self.mode.title()), MessageStyle::Info);
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
        self.refresh();
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.results.len().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Log the current result count to the message panel
    pub fn commit(&mut self) {
        match (&self.query, &self.input_error) {
            (Some(query), _) => {
                let text = format!("{} result(s) for {query}", self.results.len());
                self.add_message(&text, MessageStyle::Success);
            }
            (None, Some(e)) => {
                let text = e.to_string();
                self.add_message(&text, MessageStyle::Error);
            }
            (None, None) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_mode(),
            KeyCode::Enter => self.commit(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use crate::wordlists::loader::words_from_slice;

    fn store() -> WordStore {
        WordStore::from_words(words_from_slice(&["thickly", "thirdly", "quickly", "python"]))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn result_texts<'a>(app: &App<'a>) -> Vec<&'a str> {
        app.results.iter().map(|&w| w.text()).collect()
    }

    #[test]
    fn starts_in_pattern_mode_with_statistics() {
        let store = store();
        let app = App::new(QueryEngine::new(&store));

        assert_eq!(app.mode, SearchMode::Pattern);
        assert!(app.results.is_empty());
        assert_eq!(app.statistics.as_ref().map(|s| s.total_words), Some(4));
    }

    #[test]
    fn typing_updates_results_live() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));

        type_text(&mut app, "th***ly");
        assert_eq!(result_texts(&app), ["thickly", "thirdly"]);

        press(&mut app, KeyCode::Backspace);
        assert!(app.results.is_empty());
        assert!(app.query.is_some());
    }

    #[test]
    fn tab_cycles_modes_and_clears_input() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));

        type_text(&mut app, "th");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, SearchMode::Length);
        assert!(app.input_buffer.is_empty());

        type_text(&mut app, "6");
        assert_eq!(result_texts(&app), ["python"]);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, SearchMode::Contains);
        type_text(&mut app, "qk");
        assert_eq!(result_texts(&app), ["quickly"]);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, SearchMode::Pattern);
    }

    #[test]
    fn invalid_length_is_reported() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "x");
        assert_eq!(app.input_error, Some(InputError::NotANumber));
        assert!(app.results.is_empty());

        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Please enter a valid number!");
    }

    #[test]
    fn enter_logs_result_count() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));

        type_text(&mut app, "******");
        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "1 result(s) for pattern '******'");
    }

    #[test]
    fn scrolling_is_bounded() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "7");
        assert_eq!(app.results.len(), 3);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn quit_keys() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(QueryEngine::new(&store));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn message_log_is_capped() {
        let store = store();
        let mut app = App::new(QueryEngine::new(&store));
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
