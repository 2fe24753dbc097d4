//! Session line rendering.

use ajfses_core::api::Endpoint;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::SessionSnapshot;

pub fn render_session_line(
    frame: &mut Frame,
    area: Rect,
    session: &SessionSnapshot,
    endpoint: &Endpoint,
) {
    let status = match &session.user {
        Some(user) => Span::styled(
            format!("● signed in as {user}"),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled("○ not signed in", Style::default().fg(Color::Red)),
    };
    let line = Line::from(vec![
        status,
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} api {}", endpoint.environment, endpoint.base_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
