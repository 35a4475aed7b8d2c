//! TUI rendering with ratatui
//!
//! Live search screen: input box, result list, statistics and messages.

use super::app::{App, MessageStyle};
use crate::output::formatters::distribution_bar;
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
            Constraint::Length(3), // Input area
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Results
            Constraint::Percentage(45), // Statistics + messages
        ])
        .split(chunks[2]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 CROSSWORD CHEATER - Live Search")
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.input_error.is_some() {
        Color::Red
    } else {
        Color::Yellow
    };
    let title = format!(" {} | TAB to switch ", app.mode.title());

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.query {
        Some(query) => format!(" {} match(es) for {query} ", app.results.len()),
        None => " Results ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if let Some(error) = &app.input_error {
        let paragraph = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    if app.query.is_some() && app.results.is_empty() {
        let paragraph = Paragraph::new("No matches found!")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .skip(app.scroll)
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(word.text(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" ({})", word.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Statistics
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Word List ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(stats) = &app.statistics else {
        f.render_widget(Paragraph::new("No words loaded").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(format!("Total words:    {}", stats.total_words)),
        Line::from(format!(
            "Shortest:       {} ({})",
            stats.shortest_word,
            stats.shortest_word.len()
        )),
        Line::from(format!(
            "Longest:        {} ({})",
            stats.longest_word,
            stats.longest_word.len()
        )),
        Line::from(format!("Average length: {:.2}", stats.average_length)),
        Line::from(""),
    ];

    let peak = stats.peak_count();
    for (length, count) in &stats.length_distribution {
        lines.push(Line::from(vec![
            Span::raw(format!("{length:>2}: ")),
            Span::styled(
                distribution_bar(*count, peak, 16),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = format!(
        "Esc: Quit | TAB: Mode | Enter: Log result | ↑/↓ PgUp/PgDn: Scroll ({}/{})",
        app.scroll.min(app.results.len()),
        app.results.len()
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
