//! Maps keyboard and mouse events to fire controls

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What an input event asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleSource,
    IncreaseSource,
    DecreaseSource,
    TogglePause,
    ShowHelp,
    Resize(u16, u16),
    Quit,
}

pub const HELP: &str = "\
DOOM FIRE
─────────────────────────
Space/Enter/Click  Toggle fire source
Up/k/+             Strengthen source
Down/j/-           Weaken source
p                  Pause
q/Esc              Quit
?                  Close help";

/// Translate a terminal event, `None` when it carries no action
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse),
        Event::Resize(w, h) => Some(Action::Resize(*w, *h)),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleSource),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => Some(Action::IncreaseSource),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => Some(Action::DecreaseSource),
        KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('?') => Some(Action::ShowHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ToggleSource),
        _ => None,
    }
}
