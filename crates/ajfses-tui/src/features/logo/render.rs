//! Header badge rendering.

use ajfses_core::logo::LogoVariant;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::LogoState;

pub fn render_logo(frame: &mut Frame, area: Rect, logo: &LogoState) {
    let badge = match logo.displayed() {
        LogoVariant::Circle => "( AJFSES )",
        LogoVariant::Normal => "[ AJFSES ]",
    };
    let mut badge_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    if logo.is_fading() {
        badge_style = badge_style.add_modifier(Modifier::DIM);
    }

    let line = Line::from(vec![
        Span::styled(badge, badge_style),
        Span::raw("  "),
        Span::styled(logo.asset(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
