use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Calculates the area for an overlay panel, centered within `area`.
///
/// The panel never touches the viewport edges.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let overlay_x = area.x + (area.width.saturating_sub(width)) / 2;
    let overlay_y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Shrinks `popup` around its center by `scale` and pushes it down by
/// `offset` rows, clamped to `bounds`.
pub fn transform_area(popup: Rect, bounds: Rect, scale: f32, offset: f32) -> Rect {
    let width = (f32::from(popup.width) * scale).round() as u16;
    let height = (f32::from(popup.height) * scale).round() as u16;
    let x = popup.x + (popup.width.saturating_sub(width)) / 2;
    let y = popup.y + (popup.height.saturating_sub(height)) / 2 + offset.max(0.0).round() as u16;

    let bottom = bounds.y + bounds.height;
    let y = y.min(bottom.saturating_sub(height));
    Rect::new(x, y, width, height).intersection(bounds)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Dims whatever is already drawn in `area`.
///
/// Terminals have no alpha, so opacity maps onto three steps:
/// untouched, dimmed, dimmed and greyed.
pub fn dim_area(buf: &mut Buffer, area: Rect, opacity: f32) {
    let area = area.intersection(buf.area);
    if opacity < 0.34 {
        return;
    }
    let mut style = Style::default().add_modifier(Modifier::DIM);
    if opacity >= 0.67 {
        style = style.fg(Color::DarkGray);
    }
    buf.set_style(area, style);
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height - 1;
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}
