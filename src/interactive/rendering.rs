//! TUI rendering with ratatui
//!
//! Layout for the Word Scramble interface.

use super::app::{Alert, App, MessageStyle};
use crate::output::formatters::{found_summary, score_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_root(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_root(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.game.root_word()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", score_badge(word)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let max_score = app.analysis.as_ref().map_or(0, |a| a.max_score);
    let content = vec![
        Line::from(vec![
            Span::raw("Your score: "),
            Span::styled(
                app.game.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Best possible: {max_score}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (found, possible) = app.progress();
    let percent = if possible == 0 {
        0
    } else {
        ((found * 100) / possible).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(found_summary(found, possible));

    f.render_widget(gauge, area);
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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter new word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.alert.is_some() {
        "Enter/Esc: Dismiss"
    } else {
        "Enter: Submit | Ctrl+N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK! ]", Style::default().fg(Color::Cyan))),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
