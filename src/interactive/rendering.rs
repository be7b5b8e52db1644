//! TUI rendering with ratatui
//!
//! Layout: header, results on the left, history and messages on the right,
//! the query input and a status bar along the bottom.

use super::app::{App, HISTORY_LIMIT, MessageStyle, ResultsView};
use crate::core::QueryKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn kind_color(kind: QueryKind) -> Color {
    match kind {
        QueryKind::Anagram => Color::Green,
        QueryKind::MissingLetters => Color::Yellow,
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    match &app.results {
        ResultsView::Empty => {
            let help = vec![
                Line::from("Enter a word to list its anagrams."),
                Line::from(vec![
                    Span::raw("Use "),
                    Span::styled(".", Style::default().fg(Color::Yellow)),
                    Span::raw(" for each unknown letter, e.g. "),
                    Span::styled("cr..s.o.d", Style::default().fg(Color::Yellow)),
                ]),
            ];
            let paragraph = Paragraph::new(help)
                .block(block.title(" Results "))
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, area);
        }
        ResultsView::Matches { query, kind, words } => {
            let title = format!(
                " {} for {} ({}) ",
                if *kind == QueryKind::Anagram {
                    "Anagrams"
                } else {
                    "Matches"
                },
                query.to_uppercase(),
                words.len()
            );
            let items: Vec<ListItem> = if words.is_empty() {
                vec![ListItem::new("No matches found.").style(Style::default().fg(Color::Red))]
            } else {
                words
                    .iter()
                    .skip(app.scroll)
                    .map(|w| ListItem::new(w.as_str()).style(Style::default().fg(kind_color(*kind))))
                    .collect()
            };
            f.render_widget(List::new(items).block(block.title(title)), area);
        }
        ResultsView::Groups(lines) => {
            let items: Vec<ListItem> = lines
                .iter()
                .skip(app.scroll)
                .map(|line| ListItem::new(line.as_str()))
                .collect();
            let title = format!(" Anagram Groups ({}) ", lines.len());
            f.render_widget(List::new(items).block(block.title(title)), area);
        }
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(HISTORY_LIMIT)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", entry.query),
                    Style::default().fg(kind_color(entry.kind)),
                ),
                Span::raw(format!(" {} ", entry.kind.label())),
                Span::styled(
                    format!("{}", entry.match_count),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Enter word or pattern ({}/{}) | Enter: search ",
        app.input_buffer.chars().count(),
        app.solver.max_word_len()
    );

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let dictionary_text = format!(
        "Dictionary: {} anagram / {} length entries",
        app.solver.anagrams().len(),
        app.solver.lengths().len()
    );
    f.render_widget(
        Paragraph::new(dictionary_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Queries: {} | Matched: {} | Rejected: {}",
        app.stats.queries, app.stats.matched, app.stats.rejected
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc: Quit | ↑↓ PgUp PgDn: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
