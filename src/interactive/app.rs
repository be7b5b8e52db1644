//! TUI application state and logic

use crate::commands::simple::{GROUPS_COMMAND, QUIT};
use crate::core::QueryKind;
use crate::errors::QueryError;
use crate::output::formatters::{NO_MATCHES, format_group, too_long_notice};
use crate::solver::{Solver, anagram_groups};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Most recent queries kept in the history panel
pub const HISTORY_LIMIT: usize = 10;

/// Application state
pub struct App<'a> {
    pub solver: &'a Solver,
    pub debug: bool,
    pub input_buffer: String,
    pub results: ResultsView,
    pub scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What the results panel is showing
#[derive(Debug, Clone, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    Matches {
        query: String,
        kind: QueryKind,
        words: Vec<String>,
    },
    Groups(Vec<String>),
}

impl ResultsView {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Matches { words, .. } => words.len(),
            Self::Groups(lines) => lines.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub query: String,
    pub kind: QueryKind,
    pub match_count: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub queries: usize,
    pub matched: usize,
    pub rejected: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver, debug: bool) -> Self {
        let mut app = Self {
            solver,
            debug,
            input_buffer: String::new(),
            results: ResultsView::Empty,
            scroll: 0,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Type a word to find its anagrams.", MessageStyle::Info);
        app.add_message("Use . for unknown letters, e.g. c.t", MessageStyle::Info);
        app
    }

    /// Add a typed character, ignoring anything past the length limit
    pub fn push_char(&mut self, c: char) {
        if c.is_whitespace() {
            return;
        }
        if self.input_buffer.chars().count() < self.solver.max_word_len() {
            self.input_buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Handle the current input line as a query or command
    pub fn submit(&mut self) {
        let token = std::mem::take(&mut self.input_buffer);
        let token = token.trim();

        if token.is_empty() {
            return;
        }
        if token == QUIT {
            self.should_quit = true;
            return;
        }
        if self.debug && token == GROUPS_COMMAND {
            let lines: Vec<String> = anagram_groups(self.solver.anagrams(), 2)
                .iter()
                .map(format_group)
                .collect();
            self.add_message(
                &format!("{} anagram groups", lines.len()),
                MessageStyle::Info,
            );
            self.results = ResultsView::Groups(lines);
            self.scroll = 0;
            return;
        }

        match self.solver.lookup(token) {
            Ok(outcome) => {
                self.stats.queries += 1;
                if outcome.is_empty() {
                    self.add_message(
                        &format!("{}: {NO_MATCHES}", outcome.query),
                        MessageStyle::Error,
                    );
                } else {
                    self.stats.matched += 1;
                    self.add_message(
                        &format!("{}: {} found", outcome.query, outcome.matches.len()),
                        MessageStyle::Success,
                    );
                }

                self.history.push(HistoryEntry {
                    query: outcome.query.clone(),
                    kind: outcome.kind,
                    match_count: outcome.matches.len(),
                });
                if self.history.len() > HISTORY_LIMIT {
                    self.history.remove(0);
                }
                self.results = ResultsView::Matches {
                    query: outcome.query,
                    kind: outcome.kind,
                    words: outcome.matches,
                };
                self.scroll = 0;
            }
            Err(QueryError::InvalidInput { token }) => {
                self.stats.rejected += 1;
                self.add_message(
                    &format!("Invalid word: '{token}' (letters and . only)"),
                    MessageStyle::Error,
                );
            }
            Err(QueryError::TooLong { max, .. }) => {
                self.stats.rejected += 1;
                self.add_message(&too_long_notice(max), MessageStyle::Error);
            }
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let last = self.results.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(last);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
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
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);
    terminal.show_cursor()?;

    res
}

/// Restores the terminal when dropped, including on early error returns
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
