pub mod game_view;

pub use game_view::GameView;

use crate::app::AppCommand;
use common::GameSession;
use crossterm::event::KeyEvent;
use ratatui::Frame;

pub trait View {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand>;
    fn render(&self, frame: &mut Frame, session: &GameSession);
}
