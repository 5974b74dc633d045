use super::traits::CellRenderer;
use super::types::{CharGrid, RenderConfig};
use common::{Cell, GameSession};

pub struct BoardRenderer<R: CellRenderer> {
    renderer: R,
}

impl<R: CellRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, session: &GameSession, config: &RenderConfig) -> CharGrid {
        let grid = session.grid();
        let mut chars = CharGrid::new(grid.cols(), grid.rows(), config.chars_per_point);
        let head = session.head();

        for (index, cell) in session.board().iter().enumerate() {
            let pattern = match cell {
                Cell::Body if index == head => {
                    self.renderer.render_head(session.direction(), session.is_game_over())
                }
                Cell::Body => self.renderer.render_body(),
                Cell::Food => self.renderer.render_food(),
                Cell::Empty => self.renderer.render_empty(),
            };
            let (x, y) = grid.to_xy(index);
            chars.set_logical_point(x, y, &pattern);
        }

        chars
    }
}
