use super::View;
use crate::app::AppCommand;
use crate::input;
use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::traits::CellRenderer;
use crate::render::types::RenderConfig;
use common::{GameSession, GameStatus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_CELL_SIZE: usize = 4;

pub struct GameView {
    render_config: RenderConfig,
}

impl GameView {
    pub fn new(render_config: RenderConfig) -> Self {
        Self { render_config }
    }

    pub fn cell_size(&self) -> usize {
        self.render_config.chars_per_point.horizontal
    }

    fn zoom(&mut self, delta: isize) {
        let size = self.cell_size().saturating_add_signed(delta).clamp(1, MAX_CELL_SIZE);
        self.render_config = RenderConfig::with_cell_size(size);
    }

    fn render_header(&self, session: &GameSession) -> Paragraph<'static> {
        Paragraph::new(format!("Length: {}", session.snake_len()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let renderer = StandardRenderer::new(self.render_config.chars_per_point);
        let char_dims = renderer.char_dimensions();
        let board_renderer = BoardRenderer::new(renderer);
        let char_grid = board_renderer.render(session, &self.render_config);

        // +2 for the borders on each axis
        let arena_width = (char_grid.physical_width() + 2).min(area.width as usize) as u16;
        let arena_height = (char_grid.physical_height() + 2).min(area.height as usize) as u16;

        let x_offset = area.width.saturating_sub(arena_width) / 2;
        let y_offset = area.height.saturating_sub(arena_height) / 2;
        let arena_area = Rect::new(area.x + x_offset, area.y + y_offset, arena_width, arena_height);

        let border_color = if session.is_game_over() { Color::Red } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        tracing::trace!(
            "Arena {}x{} cells at {} chars per cell",
            session.grid().cols(),
            session.grid().rows(),
            char_dims.horizontal
        );
        frame.render_widget(Paragraph::new(char_grid.into_styled_lines()).block(block), arena_area);
    }

    fn render_status(&self, session: &GameSession) -> Paragraph<'static> {
        let (text, color) = match session.status() {
            GameStatus::Running => ("Running", Color::Green),
            GameStatus::Paused => ("Paused - press p to resume", Color::Yellow),
            GameStatus::GameOver => ("Game over - press n for a new game", Color::Red),
        };

        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let lines = vec![Line::from(
            "Arrows/WASD: Turn | p: Pause/Resume | n: New game | +/-: Zoom | q: Quit",
        )];

        Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }
}

impl View for GameView {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.zoom(1);
                None
            }
            KeyCode::Char('-') => {
                self.zoom(-1);
                None
            }
            _ => input::map_key(key),
        }
    }

    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header (length)
                Constraint::Min(5),    // Board
                Constraint::Length(3), // Status
                Constraint::Length(3), // Controls help at bottom
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(session), chunks[0]);
        self.render_arena(frame, chunks[1], session);
        frame.render_widget(self.render_status(session), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }
}
