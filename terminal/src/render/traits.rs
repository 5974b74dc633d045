use common::Direction;
use super::types::{CharPattern, CharDimensions};

pub trait CellRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_head(&self, direction: Direction, game_over: bool) -> CharPattern;

    fn render_body(&self) -> CharPattern;

    fn render_food(&self) -> CharPattern;

    fn render_empty(&self) -> CharPattern;
}
