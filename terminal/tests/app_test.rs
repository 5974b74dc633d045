use common::{Direction, GameCommand, GameConfig, GameStatus};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use terminal::app::{App, AppCommand};
use terminal::config::Settings;
use terminal::input;
use terminal::render::types::RenderConfig;

fn settings(rows: usize, cols: usize, start: usize) -> Settings {
    Settings {
        game: GameConfig::new(rows, cols, start),
        render: RenderConfig::default(),
        seed: Some(1),
        log_file: std::env::temp_dir().join("torus-snake-test.log"),
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn arrow_keys_and_wasd_map_to_turns() {
    let turn = |direction| Some(AppCommand::Engine(GameCommand::Turn { direction }));
    assert_eq!(input::map_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), turn(Direction::Up));
    assert_eq!(input::map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)), turn(Direction::Left));
    assert_eq!(input::map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)), turn(Direction::Down));
    assert_eq!(input::map_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)), turn(Direction::Right));
    assert_eq!(input::map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    assert_eq!(
        input::map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(AppCommand::Quit)
    );
}

#[test]
fn focus_changes_pause_and_resume() {
    assert_eq!(
        input::map_event(&Event::FocusLost),
        Some(AppCommand::Engine(GameCommand::Pause))
    );
    assert_eq!(
        input::map_event(&Event::FocusGained),
        Some(AppCommand::Engine(GameCommand::Resume))
    );
}

#[test]
fn key_releases_are_ignored() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Up,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(app.handle_event(&release), None);
}

#[test]
fn start_resumes_and_takes_focus() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    assert_eq!(app.session().status(), GameStatus::Paused);
    assert!(!app.has_focus());

    app.start().unwrap();

    assert_eq!(app.session().status(), GameStatus::Running);
    assert!(app.has_focus());
}

#[test]
fn toggle_pause_flips_between_states() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    app.start().unwrap();

    let command = app.handle_event(&key(KeyCode::Char('p'))).unwrap();
    assert_eq!(command, AppCommand::TogglePause);
    app.handle_command(command.clone()).unwrap();
    assert_eq!(app.session().status(), GameStatus::Paused);
    assert!(!app.has_focus());

    app.handle_command(command).unwrap();
    assert_eq!(app.session().status(), GameStatus::Running);
}

#[test]
fn ticks_and_turns_move_the_snake() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    app.start().unwrap();

    app.on_tick().unwrap();
    assert_eq!(app.session().head(), 13);

    let command = app.handle_event(&key(KeyCode::Down)).unwrap();
    app.handle_command(command).unwrap();
    app.on_tick().unwrap();
    assert_eq!(app.session().head(), 18);
}

#[test]
fn new_game_resets_and_starts() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    app.start().unwrap();
    for _ in 0..3 {
        app.on_tick().unwrap();
    }
    assert_ne!(app.session().head(), 12);

    app.handle_command(AppCommand::NewGame).unwrap();

    assert_eq!(app.session().head(), 12);
    assert_eq!(app.session().snake_len(), 1);
    assert_eq!(app.session().food(), None);
    assert_eq!(app.session().status(), GameStatus::Running);
}

#[test]
fn full_board_ends_the_session_with_an_error() {
    // 1x2 board: the first tick puts food on the only free cell, the second
    // eats it and leaves nowhere for new food
    let mut app = App::new(&settings(1, 2, 0)).unwrap();
    app.start().unwrap();

    app.on_tick().unwrap();
    assert_eq!(app.session().food(), Some(0));

    let before = app.session().clone();
    assert!(app.on_tick().is_err());
    assert_eq!(app.session(), &before);
}

#[test]
fn zoom_keys_stay_in_the_view() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    assert_eq!(app.handle_event(&key(KeyCode::Char('+'))), None);
    assert_eq!(app.handle_event(&key(KeyCode::Char('-'))), None);
}

#[test]
fn screen_shows_length_and_status() {
    let mut app = App::new(&settings(5, 5, 12)).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Length: 1"));
    assert!(text.contains("Paused"));

    app.start().unwrap();
    app.on_tick().unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Running"));
    assert!(text.contains('█'));
}
