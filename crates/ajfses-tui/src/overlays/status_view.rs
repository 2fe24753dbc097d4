//! Status overlay rendering.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{
    InputHint, calculate_overlay_area, dim_area, render_hints, render_overlay_container,
    transform_area,
};
use super::status::OverlayController;
use crate::common::RegionTree;

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 9;

impl OverlayController {
    /// Draws the overlay over whatever is already in `area` and records the
    /// overlay regions for pointer routing.
    pub fn render(&self, tree: &RegionTree, frame: &mut Frame, area: Rect, now: Instant) {
        render_status_overlay(self, tree, frame, area, now);
    }
}

fn render_status_overlay(
    controller: &OverlayController,
    tree: &RegionTree,
    frame: &mut Frame,
    area: Rect,
    now: Instant,
) {
    let regions = controller.regions();
    let (Some(request), false) = (controller.current(), controller.is_hidden()) else {
        tree.clear_subtree(regions.surface);
        return;
    };

    let visual = controller.visual_at(now);
    tree.set_area(regions.surface, area);
    tree.set_area(regions.backdrop, area);
    dim_area(frame.buffer_mut(), area, visual.backdrop_opacity);

    let resting = calculate_overlay_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let popup = transform_area(resting, area, visual.panel_scale, visual.panel_offset);
    tree.set_area(regions.panel, popup);

    let icon = request.severity.icon_style();
    let faded = visual.panel_opacity < 0.5;
    let (accent, text) = if faded {
        (Color::DarkGray, Color::DarkGray)
    } else {
        (icon.color, Color::Reset)
    };

    render_overlay_container(frame, popup, "Status", accent);
    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );
    if inner.width < 4 || inner.height < 2 {
        tree.clear_subtree(regions.icon);
        tree.clear_subtree(regions.title);
        tree.clear_subtree(regions.message);
        return;
    }

    let icon_area = Rect::new(inner.x + 1, inner.y, 3, 1);
    let title_area = Rect::new(inner.x + 5, inner.y, inner.width.saturating_sub(6), 1);
    let message_area = Rect::new(
        inner.x + 1,
        inner.y + 2,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    tree.set_area(regions.icon, icon_area);
    tree.set_area(regions.title, title_area);
    tree.set_area(regions.message, message_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("({})", icon.glyph),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        icon_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            request.title.as_str(),
            Style::default().fg(text).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            request.message.as_str(),
            Style::default().fg(text),
        )))
        .wrap(Wrap { trim: true }),
        message_area,
    );

    let hints = [
        InputHint::new("Esc", "close"),
        InputHint::new("click outside", "dismiss"),
    ];
    render_hints(frame, inner, &hints, accent);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::RegionId;
    use crate::overlays::{OverlayRegions, OverlayRequest, OverlayTiming};

    fn setup() -> (RegionTree, RegionId, OverlayController) {
        let mut tree = RegionTree::new();
        let root = tree.add_root("console");
        let regions = OverlayRegions::mount(&mut tree, root);
        let controller = OverlayController::new(&tree, regions, OverlayTiming::default());
        (tree, root, controller)
    }

    fn draw(tree: &RegionTree, controller: &OverlayController, now: Instant) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| controller.render(tree, frame, frame.area(), now))
            .unwrap();
        terminal
    }

    #[test]
    fn test_hidden_overlay_has_no_hit_area() {
        let (tree, _root, controller) = setup();
        draw(&tree, &controller, Instant::now());
        assert_eq!(tree.area(controller.regions().surface), Rect::default());
        assert_eq!(tree.hit_test(40, 12), None);
    }

    #[test]
    fn test_open_overlay_draws_message_and_routes_clicks() {
        let (tree, _root, mut controller) = setup();
        let effects = controller.open(OverlayRequest::new("Saved", "Member updated.", "success"));
        let crate::effects::UiEffect::ScheduleTimer { id, .. } = effects[0] else {
            panic!("expected enter timer");
        };
        controller.on_timer(id);

        let later = Instant::now() + std::time::Duration::from_secs(1);
        let terminal = draw(&tree, &controller, later);
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Saved"));
        assert!(screen.contains("Member updated."));
        assert!(screen.contains('✓'));

        let regions = controller.regions();
        let panel = tree.area(regions.panel);
        assert_eq!(tree.hit_test(0, 0), Some(regions.backdrop));
        let inside = tree.hit_test(panel.x + 1, panel.y + 1).unwrap();
        assert!(tree.contains(regions.panel, inside));
    }
}
