//! UI rendering for the converter.

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::ConverterApp;
use crate::radix::Base;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &ConverterApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(frame.area());

    // Left side: header and one input row per base
    let mut left_constraints = vec![Constraint::Length(3)];
    left_constraints.extend(std::iter::repeat(Constraint::Length(3)).take(Base::ALL.len()));
    left_constraints.push(Constraint::Min(0));

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(left_constraints)
        .split(chunks[0]);

    draw_header(frame, left_chunks[0], app);
    for (i, base) in Base::ALL.iter().enumerate() {
        draw_field(frame, left_chunks[i + 1], app, *base, i == app.focus);
    }

    // Right side: info panel, status, help
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(chunks[1]);

    draw_info(frame, right_chunks[0], app);
    draw_status(frame, right_chunks[1], app);
    draw_help(frame, right_chunks[2], app);
}

/// Draw the application header.
fn draw_header(frame: &mut Frame, area: Rect, app: &ConverterApp) {
    let header = Paragraph::new(app.dict().header)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Draw one input field row.
fn draw_field(frame: &mut Frame, area: Rect, app: &ConverterApp, base: Base, focused: bool) {
    let dict = app.dict();
    let field = app.converter.field(base);

    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if field.text().is_empty() && !focused {
        Line::from(Span::styled(
            dict.placeholder(base),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if focused { "▏" } else { "" };
        let text_style = if field.has_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(field.text().to_string(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ])
    };

    let marker = if focused { "▶ " } else { "  " };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!("{}{} ", marker, dict.label(base)))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);
}

/// Draw the radix economy info panel.
fn draw_info(frame: &mut Frame, area: Rect, app: &ConverterApp) {
    let dict = app.dict();

    let mut lines = vec![Line::from(dict.intro), Line::from("")];
    for base in Base::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", dict.label(base)),
                Style::default().fg(Color::White),
            ),
            Span::styled(base.symbols(), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        dict.why_title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(dict.why_text));

    let info = Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", dict.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(info, area);
}

/// Draw the status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &ConverterApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw the help panel.
fn draw_help(frame: &mut Frame, area: Rect, app: &ConverterApp) {
    let lang = app.lang.code();
    let help = Paragraph::new(vec![
        Line::from("Tab/↑↓: Field  Backspace: Delete  Ctrl+U: Clear"),
        Line::from(format!("F2: {}  Esc: Quit", lang)),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
