//! Console reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use ajfses_core::date;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::common::{TimerId, TimerOwner};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{OverlayPhase, OverlayRequest, Severity};
use crate::state::{AppState, ConsoleMode};

/// Effects to run once before the first event: the logo fade and, in
/// notify mode, the overlay itself.
pub fn init(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = app.tui.logo.start();
    if let ConsoleMode::Notify(request) = &app.tui.mode {
        effects.extend(app.overlay.open(request.clone()));
    }
    effects
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TimerElapsed(id) => handle_timer(app, id),
        UiEvent::SessionChecked(snapshot) => {
            let request = snapshot.status_request();
            app.tui.session = snapshot;
            app.overlay.open(request)
        }
    }
}

fn handle_timer(app: &mut AppState, id: TimerId) -> Vec<UiEffect> {
    match id.owner {
        TimerOwner::Logo => app.tui.logo.on_timer(id),
        TimerOwner::Overlay => {
            let mut effects = app.overlay.on_timer(id);
            if app.tui.is_notify() && app.overlay.phase() == OverlayPhase::Closed {
                effects.push(UiEffect::Quit);
            }
            effects
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    if let Some(effects) = app.overlay.handle_key(key) {
        return effects;
    }

    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('a') if !app.tui.is_notify() => vec![UiEffect::CheckSession],
        KeyCode::Char('d') if !app.tui.is_notify() => app.overlay.open(today_request()),
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let Some(target) = app.tui.regions.hit_test(mouse.column, mouse.row) else {
        return vec![];
    };
    app.overlay.handle_pointer_down(&app.tui.regions, target)
}

fn today_request() -> OverlayRequest {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    match date::to_canonical(&today) {
        Ok(instant) => OverlayRequest::new(
            "Today",
            format!("{today} starts at {instant}"),
            Severity::Info,
        ),
        Err(err) => OverlayRequest::new("Today", format!("{err:#}"), Severity::Error),
    }
}
