//! Console view.
//!
//! Draws the dashboard, then the status overlay on top. Every region drawn
//! gets its area recorded in the region tree for pointer routing.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::logo::render_logo;
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::session::render_session_line;
use crate::state::{AppState, ConsoleMode};

pub fn render(app: &AppState, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Renders with animations sampled at `now`.
pub fn render_at(app: &AppState, frame: &mut Frame, now: Instant) {
    let area = frame.area();
    let tui = &app.tui;
    let page = tui.page;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    tui.regions.set_area(page.root, area);
    tui.regions.set_area(page.header, chunks[0]);
    tui.regions.set_area(page.body, chunks[1]);
    tui.regions.set_area(page.footer, chunks[2]);

    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let logo_area = header.inner(chunks[0]);
    frame.render_widget(header, chunks[0]);
    render_logo(frame, logo_area, &tui.logo);

    render_body(app, frame, chunks[1]);

    let hints = match tui.mode {
        ConsoleMode::Dashboard => vec![
            InputHint::new("a", "check session"),
            InputHint::new("d", "today"),
            InputHint::new("q", "quit"),
        ],
        ConsoleMode::Notify(_) => vec![InputHint::new("Esc", "close")],
    };
    render_hints(frame, chunks[2], &hints, Color::Cyan);

    app.overlay.render(&tui.regions, frame, area, now);
}

fn render_body(app: &AppState, frame: &mut Frame, area: Rect) {
    let tui = &app.tui;
    let [session_area, _, welcome_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

    render_session_line(frame, session_area, &tui.session, &tui.endpoint);

    let welcome = vec![
        Line::from(Span::styled(
            "Admin console",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Status messages appear here as a dialog.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), welcome_area);
}
