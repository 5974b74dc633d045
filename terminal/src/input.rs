use crate::app::AppCommand;
use common::{Direction, GameCommand};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into an app command. Key releases and repeats
/// reported by some terminals are ignored.
pub fn map_event(event: &Event) -> Option<AppCommand> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::FocusLost => Some(AppCommand::Engine(GameCommand::Pause)),
        Event::FocusGained => Some(AppCommand::Engine(GameCommand::Resume)),
        _ => None,
    }
}

pub fn map_key(key: KeyEvent) -> Option<AppCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }

    let turn = |direction| Some(AppCommand::Engine(GameCommand::Turn { direction }));
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => turn(Direction::Right),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(AppCommand::TogglePause),
        KeyCode::Char('r') => Some(AppCommand::Engine(GameCommand::Resume)),
        KeyCode::Char('n') => Some(AppCommand::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}
