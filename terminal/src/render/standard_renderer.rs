use common::Direction;
use ratatui::style::{Color, Modifier, Style};
use super::traits::CellRenderer;
use super::types::{CharPattern, CharDimensions};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl CellRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_head(&self, _direction: Direction, game_over: bool) -> CharPattern {
        let color = if game_over { Color::Red } else { Color::White };
        CharPattern::single(
            '█',
            self.char_dims,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    fn render_body(&self) -> CharPattern {
        CharPattern::single('▓', self.char_dims, Style::default().fg(Color::Green))
    }

    fn render_food(&self) -> CharPattern {
        if self.char_dims.horizontal <= 2 && self.char_dims.vertical == 1 {
            return CharPattern::single('●', self.char_dims, Style::default().fg(Color::Yellow));
        }

        // For larger dimensions, create a checkerboard so food reads as a dot
        let mut pattern = CharPattern::empty(self.char_dims);
        pattern.style = Style::default().fg(Color::Yellow);
        for (y, row) in pattern.chars.iter_mut().enumerate() {
            for (x, ch) in row.iter_mut().enumerate() {
                if (x + y) % 2 == 0 {
                    *ch = '●';
                }
            }
        }
        pattern
    }

    fn render_empty(&self) -> CharPattern {
        CharPattern::empty(self.char_dims)
    }
}
