//! Status overlay controller.
//!
//! Owns the single status overlay of a console: what it shows, which phase of
//! its lifecycle it is in, and the timers that move it between phases.
//!
//! ```text
//! Closed --open--> OpeningAnimation --timer--> Open --close--> ClosingAnimation --timer--> Closed
//!                        |                                          ^      |
//!                        +------------------close-------------------+      |
//!                        ^-------------------------open-----------------------+
//! ```
//!
//! Every `open`/`close` cancels the pending timer before scheduling its own,
//! and `on_timer` only honours the id it is waiting for, so a superseded
//! timer can never drive the state machine.

use std::fmt;
use std::time::{Duration, Instant};

use ajfses_core::config::OverlayConfig;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Color;

use super::visual::{Transition, Visual};
use crate::common::{RegionId, RegionTree, TimerId, TimerOwner, TimerSeq};
use crate::effects::UiEffect;

// ============================================================================
// Request
// ============================================================================

/// Outcome classification of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Parses a severity label. Unknown labels fall back to `Info`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn icon_style(self) -> IconStyle {
        match self {
            Severity::Success => IconStyle {
                glyph_token: "fa-check-circle",
                color_token: "text-green-500",
                glyph: "✓",
                color: Color::Green,
            },
            Severity::Error => IconStyle {
                glyph_token: "fa-times-circle",
                color_token: "text-red-500",
                glyph: "✗",
                color: Color::Red,
            },
            Severity::Info => IconStyle {
                glyph_token: "fa-info-circle",
                color_token: "text-blue-500",
                glyph: "i",
                color: Color::Blue,
            },
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        Severity::from_label(label)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Error => f.write_str("error"),
            Severity::Info => f.write_str("info"),
        }
    }
}

/// Icon presentation for a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub glyph_token: &'static str,
    pub color_token: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

/// A message to show in the status overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRequest {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl OverlayRequest {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<Severity>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

// ============================================================================
// Regions / Timing
// ============================================================================

/// Regions the controller draws into and routes pointer input through.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRegions {
    /// Full-viewport wrapper; pointer input anywhere on it reaches the overlay.
    pub surface: RegionId,
    pub backdrop: RegionId,
    /// Content panel; pointer input inside it never dismisses.
    pub panel: RegionId,
    pub icon: RegionId,
    pub title: RegionId,
    pub message: RegionId,
}

impl OverlayRegions {
    /// Adds the standard overlay structure under `parent`.
    ///
    /// Call after the page regions so the overlay stacks above them.
    pub fn mount(tree: &mut RegionTree, parent: RegionId) -> Self {
        let surface = tree.add_child(parent, "overlay.surface");
        let backdrop = tree.add_child(surface, "overlay.backdrop");
        let panel = tree.add_child(surface, "overlay.panel");
        let icon = tree.add_child(panel, "overlay.icon");
        let title = tree.add_child(panel, "overlay.title");
        let message = tree.add_child(panel, "overlay.message");
        Self {
            surface,
            backdrop,
            panel,
            icon,
            title,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTiming {
    /// Delay between committing the start state and applying the end state.
    pub enter_delay: Duration,
    /// Time from `close()` until the overlay is hidden.
    pub exit_duration: Duration,
    /// Length of the visual transition.
    pub transition: Duration,
}

impl Default for OverlayTiming {
    fn default() -> Self {
        Self::from(&OverlayConfig::default())
    }
}

impl From<&OverlayConfig> for OverlayTiming {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            enter_delay: config.enter_delay(),
            exit_duration: config.exit_duration(),
            transition: config.transition(),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    OpeningAnimation,
    Open,
    ClosingAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingStep {
    Reveal,
    Hide,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    step: PendingStep,
}

#[derive(Debug)]
pub struct OverlayController {
    regions: OverlayRegions,
    timing: OverlayTiming,
    phase: OverlayPhase,
    current: Option<OverlayRequest>,
    hidden: bool,
    visual: Transition,
    pending: Option<PendingTimer>,
    timers: TimerSeq,
}

impl OverlayController {
    /// Creates the controller for an overlay mounted in `tree`.
    ///
    /// # Panics
    /// Panics if the regions are not part of `tree`, or if the backdrop and
    /// panel are not inside the surface, or the content regions not inside
    /// the panel. An overlay without its surface is a programming error.
    pub fn new(tree: &RegionTree, regions: OverlayRegions, timing: OverlayTiming) -> Self {
        for (name, id) in [
            ("surface", regions.surface),
            ("backdrop", regions.backdrop),
            ("panel", regions.panel),
            ("icon", regions.icon),
            ("title", regions.title),
            ("message", regions.message),
        ] {
            assert!(
                tree.exists(id),
                "overlay {name} region is missing from the region tree"
            );
        }
        assert!(
            tree.contains(regions.surface, regions.backdrop),
            "overlay backdrop must be inside the overlay surface"
        );
        assert!(
            tree.contains(regions.surface, regions.panel),
            "overlay panel must be inside the overlay surface"
        );
        for content in [regions.icon, regions.title, regions.message] {
            assert!(
                tree.contains(regions.panel, content),
                "overlay content region {} must be inside the overlay panel",
                tree.name(content)
            );
        }

        Self {
            regions,
            timing,
            phase: OverlayPhase::Closed,
            current: None,
            hidden: true,
            visual: Transition::settled(Visual::CONCEALED),
            pending: None,
            timers: TimerSeq::new(TimerOwner::Overlay),
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&OverlayRequest> {
        self.current.as_ref()
    }

    pub fn regions(&self) -> &OverlayRegions {
        &self.regions
    }

    /// True while the surface is out of the layout.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Icon style of the mounted content.
    pub fn icon_style(&self) -> Option<IconStyle> {
        self.current.as_ref().map(|r| r.severity.icon_style())
    }

    pub fn visual_at(&self, now: Instant) -> Visual {
        self.visual.sample(now)
    }

    /// Visual state the overlay is heading to.
    pub fn target_visual(&self) -> Visual {
        self.visual.target()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.hidden && self.visual.is_running(now)
    }

    /// Shows `request`.
    ///
    /// The start state is applied now; the end state is applied when the
    /// scheduled enter timer fires. Opening while already open swaps the
    /// content in place.
    pub fn open(&mut self, request: OverlayRequest) -> Vec<UiEffect> {
        let mut effects = self.cancel_pending();
        tracing::debug!(
            phase = ?self.phase,
            severity = %request.severity,
            title = %request.title,
            "opening status overlay"
        );

        if self.phase == OverlayPhase::Closed {
            self.visual = Transition::settled(Visual::CONCEALED);
        }
        self.current = Some(request);
        self.hidden = false;

        if self.phase == OverlayPhase::Open {
            return effects;
        }
        self.phase = OverlayPhase::OpeningAnimation;
        effects.push(self.schedule(PendingStep::Reveal, self.timing.enter_delay));
        effects
    }

    /// Starts hiding the overlay. No-op when closed or already closing.
    pub fn close(&mut self) -> Vec<UiEffect> {
        if matches!(
            self.phase,
            OverlayPhase::Closed | OverlayPhase::ClosingAnimation
        ) {
            return Vec::new();
        }

        let mut effects = self.cancel_pending();
        tracing::debug!(phase = ?self.phase, "closing status overlay");
        self.phase = OverlayPhase::ClosingAnimation;
        self.visual = self
            .visual
            .toward(Visual::CONCEALED, Instant::now(), self.timing.transition);
        effects.push(self.schedule(PendingStep::Hide, self.timing.exit_duration));
        effects
    }

    /// Applies the transition scheduled under `id`, if it is still pending.
    pub fn on_timer(&mut self, id: TimerId) -> Vec<UiEffect> {
        let Some(pending) = self.pending.take_if(|p| p.id == id) else {
            tracing::trace!(?id, "ignoring superseded overlay timer");
            return Vec::new();
        };

        match pending.step {
            PendingStep::Reveal => {
                self.phase = OverlayPhase::Open;
                self.visual =
                    self.visual
                        .toward(Visual::REVEALED, Instant::now(), self.timing.transition);
            }
            PendingStep::Hide => {
                self.phase = OverlayPhase::Closed;
                self.hidden = true;
                self.current = None;
                self.visual = Transition::settled(Visual::CONCEALED);
            }
        }
        tracing::debug!(phase = ?self.phase, "status overlay transition applied");
        Vec::new()
    }

    /// Pointer-down on `target`: dismisses when it lands on the surface but
    /// outside the panel.
    pub fn handle_pointer_down(&mut self, tree: &RegionTree, target: RegionId) -> Vec<UiEffect> {
        if self.hidden
            || !tree.contains(self.regions.surface, target)
            || tree.contains(self.regions.panel, target)
        {
            return Vec::new();
        }
        tracing::debug!(region = tree.name(target), "pointer outside panel dismisses overlay");
        self.close()
    }

    /// Key handling while the overlay is on screen.
    ///
    /// Returns `None` when hidden so the key reaches the page underneath.
    /// While visible the overlay is modal and swallows every key.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Vec<UiEffect>> {
        if self.hidden {
            return None;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(self.close()),
            _ => Some(Vec::new()),
        }
    }

    fn cancel_pending(&mut self) -> Vec<UiEffect> {
        self.pending
            .take()
            .map(|pending| UiEffect::CancelTimer { id: pending.id })
            .into_iter()
            .collect()
    }

    fn schedule(&mut self, step: PendingStep, after: Duration) -> UiEffect {
        let id = self.timers.next_id();
        self.pending = Some(PendingTimer { id, step });
        UiEffect::ScheduleTimer { id, after }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    struct Fixture {
        tree: RegionTree,
        page: RegionId,
        regions: OverlayRegions,
        controller: OverlayController,
    }

    fn fixture() -> Fixture {
        let mut tree = RegionTree::new();
        let root = tree.add_root("console");
        let page = tree.add_child(root, "page");
        let regions = OverlayRegions::mount(&mut tree, root);
        let controller = OverlayController::new(&tree, regions, OverlayTiming::default());
        Fixture {
            tree,
            page,
            regions,
            controller,
        }
    }

    fn request(severity: Severity) -> OverlayRequest {
        OverlayRequest::new("Saved", "Member updated.", severity)
    }

    fn scheduled(effects: &[UiEffect]) -> Vec<(TimerId, Duration)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                UiEffect::ScheduleTimer { id, after } => Some((*id, *after)),
                _ => None,
            })
            .collect()
    }

    fn cancelled(effects: &[UiEffect]) -> Vec<TimerId> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                UiEffect::CancelTimer { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn assert_invariant(controller: &OverlayController) {
        assert_eq!(
            controller.current().is_none(),
            controller.phase() == OverlayPhase::Closed
        );
    }

    #[test]
    fn test_open_commits_start_state_then_reveals_on_timer() {
        let mut f = fixture();
        let effects = f.controller.open(request(Severity::Success));

        assert_eq!(f.controller.phase(), OverlayPhase::OpeningAnimation);
        assert!(!f.controller.is_hidden());
        assert_eq!(f.controller.target_visual(), Visual::CONCEALED);
        assert_eq!(f.controller.current().unwrap().title, "Saved");
        assert_invariant(&f.controller);

        let timers = scheduled(&effects);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].1, Duration::from_millis(10));

        assert!(f.controller.on_timer(timers[0].0).is_empty());
        assert_eq!(f.controller.phase(), OverlayPhase::Open);
        assert_eq!(f.controller.target_visual(), Visual::REVEALED);
        assert_invariant(&f.controller);
    }

    #[test]
    fn test_close_hides_after_exit_duration() {
        let mut f = fixture();
        let enter = scheduled(&f.controller.open(request(Severity::Info)))[0].0;
        f.controller.on_timer(enter);

        let effects = f.controller.close();
        assert_eq!(f.controller.phase(), OverlayPhase::ClosingAnimation);
        assert_eq!(f.controller.target_visual(), Visual::CONCEALED);
        assert!(f.controller.current().is_some());

        let timers = scheduled(&effects);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].1, Duration::from_millis(300));

        f.controller.on_timer(timers[0].0);
        assert_eq!(f.controller.phase(), OverlayPhase::Closed);
        assert!(f.controller.is_hidden());
        assert!(f.controller.current().is_none());
    }

    #[test]
    fn test_open_then_immediate_close_converges_to_closed() {
        let mut f = fixture();
        let open_effects = f.controller.open(request(Severity::Success));
        let enter = scheduled(&open_effects)[0].0;

        let close_effects = f.controller.close();
        assert_eq!(cancelled(&close_effects), vec![enter]);
        let exit = scheduled(&close_effects)[0].0;
        assert_eq!(f.controller.phase(), OverlayPhase::ClosingAnimation);

        // Both delays elapse; the enter timer raced its cancellation.
        f.controller.on_timer(enter);
        assert_eq!(f.controller.phase(), OverlayPhase::ClosingAnimation);
        f.controller.on_timer(exit);

        assert_eq!(f.controller.phase(), OverlayPhase::Closed);
        assert!(f.controller.current().is_none());
        assert!(f.controller.is_hidden());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut f = fixture();
        assert!(f.controller.close().is_empty());
        assert_eq!(f.controller.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_close_while_closing_keeps_original_deadline() {
        let mut f = fixture();
        f.controller.open(request(Severity::Info));
        let exit = scheduled(&f.controller.close())[0].0;

        assert!(f.controller.close().is_empty());
        f.controller.on_timer(exit);
        assert_eq!(f.controller.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_open_during_closing_reopens_with_new_content() {
        let mut f = fixture();
        f.controller.open(request(Severity::Success));
        let exit = scheduled(&f.controller.close())[0].0;

        let effects = f.controller.open(OverlayRequest::new("Oops", "Upload failed.", "error"));
        assert_eq!(cancelled(&effects), vec![exit]);
        assert_eq!(f.controller.phase(), OverlayPhase::OpeningAnimation);
        assert_eq!(f.controller.current().unwrap().severity, Severity::Error);

        // The stale exit timer must not hide the reopened overlay.
        f.controller.on_timer(exit);
        assert!(!f.controller.is_hidden());

        let enter = scheduled(&effects)[0].0;
        f.controller.on_timer(enter);
        assert_eq!(f.controller.phase(), OverlayPhase::Open);
    }

    #[test]
    fn test_open_while_open_swaps_content() {
        let mut f = fixture();
        let enter = scheduled(&f.controller.open(request(Severity::Success)))[0].0;
        f.controller.on_timer(enter);

        let effects = f.controller.open(OverlayRequest::new("Heads up", "Second", "info"));
        assert!(effects.is_empty());
        assert_eq!(f.controller.phase(), OverlayPhase::Open);
        assert_eq!(f.controller.current().unwrap().title, "Heads up");
    }

    #[test]
    fn test_unknown_severity_renders_info_style() {
        for label in ["warning", "", "SUCCESSFUL", "info", "debug"] {
            let mut f = fixture();
            f.controller.open(OverlayRequest::new("t", "m", label));
            assert_eq!(
                f.controller.icon_style(),
                Some(Severity::Info.icon_style()),
                "{label}"
            );
        }
    }

    #[test]
    fn test_icon_table() {
        assert_eq!(Severity::from_label(" Success "), Severity::Success);
        assert_eq!(Severity::from_label("ERROR"), Severity::Error);

        let success = Severity::Success.icon_style();
        assert_eq!(
            (success.glyph_token, success.color_token),
            ("fa-check-circle", "text-green-500")
        );
        let error = Severity::Error.icon_style();
        assert_eq!(
            (error.glyph_token, error.color_token),
            ("fa-times-circle", "text-red-500")
        );
        let info = Severity::default().icon_style();
        assert_eq!(
            (info.glyph_token, info.color_token),
            ("fa-info-circle", "text-blue-500")
        );
    }

    #[test]
    fn test_click_outside_panel_closes_once() {
        let mut f = fixture();
        let enter = scheduled(&f.controller.open(request(Severity::Info)))[0].0;
        f.controller.on_timer(enter);

        let effects = f.controller.handle_pointer_down(&f.tree, f.regions.backdrop);
        assert_eq!(scheduled(&effects).len(), 1);
        assert_eq!(f.controller.phase(), OverlayPhase::ClosingAnimation);

        // A second click while closing does not issue another close.
        let again = f.controller.handle_pointer_down(&f.tree, f.regions.surface);
        assert!(again.is_empty());
    }

    #[test]
    fn test_click_inside_panel_does_not_close() {
        let mut f = fixture();
        let enter = scheduled(&f.controller.open(request(Severity::Info)))[0].0;
        f.controller.on_timer(enter);

        for target in [f.regions.panel, f.regions.title, f.regions.message, f.regions.icon] {
            assert!(f.controller.handle_pointer_down(&f.tree, target).is_empty());
        }
        assert_eq!(f.controller.phase(), OverlayPhase::Open);
    }

    #[test]
    fn test_click_off_surface_or_while_hidden_is_ignored() {
        let mut f = fixture();
        assert!(f.controller.handle_pointer_down(&f.tree, f.regions.backdrop).is_empty());

        f.controller.open(request(Severity::Info));
        assert!(f.controller.handle_pointer_down(&f.tree, f.page).is_empty());
        assert_eq!(f.controller.phase(), OverlayPhase::OpeningAnimation);
    }

    #[test]
    fn test_keys_are_modal_while_visible() {
        let mut f = fixture();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);

        assert!(f.controller.handle_key(other).is_none());

        f.controller.open(request(Severity::Info));
        assert_eq!(f.controller.handle_key(other), Some(Vec::new()));
        let effects = f.controller.handle_key(esc).unwrap();
        assert_eq!(scheduled(&effects).len(), 1);
        assert_eq!(f.controller.phase(), OverlayPhase::ClosingAnimation);
    }

    #[test]
    #[should_panic(expected = "panel must be inside the overlay surface")]
    fn test_panel_outside_surface_is_fatal() {
        let mut tree = RegionTree::new();
        let root = tree.add_root("console");
        let mut regions = OverlayRegions::mount(&mut tree, root);
        regions.panel = tree.add_child(root, "stray.panel");
        let _ = OverlayController::new(&tree, regions, OverlayTiming::default());
    }
}
