use crate::{Direction, EngineError};
use serde::{Deserialize, Serialize};

/// Fixed grid dimensions. Cell `i` sits at `x = i % cols`, `y = i / cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must have positive dimensions, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(EngineError::InvalidConfig(format!(
                "grid {rows}x{cols} has too many cells"
            )));
        }
        Ok(Grid { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    pub fn to_xy(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }

    pub fn to_index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Neighbouring cell one step in `direction`, wrapping around every edge.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let (mut x, mut y) = self.to_xy(index);
        match direction {
            Direction::Up => y = if y == 0 { self.rows - 1 } else { y - 1 },
            Direction::Down => y = if y + 1 >= self.rows { 0 } else { y + 1 },
            Direction::Left => x = if x == 0 { self.cols - 1 } else { x - 1 },
            Direction::Right => x = if x + 1 >= self.cols { 0 } else { x + 1 },
        }
        self.to_index(x, y)
    }

    /// True when `a` and `b` are one wrap-around step apart.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        Direction::ALL.iter().any(|&d| self.step(a, d) == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_xy_are_inverse() {
        let grid = Grid::new(4, 7).unwrap();
        for index in 0..grid.len() {
            let (x, y) = grid.to_xy(index);
            assert!(x < 7 && y < 4);
            assert_eq!(grid.to_index(x, y), index);
        }
    }

    #[test]
    fn stepping_off_an_edge_wraps_to_the_opposite_edge() {
        let grid = Grid::new(5, 6).unwrap();

        for index in 0..grid.len() {
            let (x, y) = grid.to_xy(index);
            let on_boundary = x == 0 || y == 0 || x == grid.cols() - 1 || y == grid.rows() - 1;
            if !on_boundary {
                continue;
            }
            for direction in Direction::ALL {
                let next = grid.step(index, direction);
                assert!(grid.contains(next));
                let (nx, ny) = grid.to_xy(next);
                match direction {
                    Direction::Up => {
                        assert_eq!(nx, x);
                        assert_eq!(ny, (y + grid.rows() - 1) % grid.rows());
                    }
                    Direction::Down => {
                        assert_eq!(nx, x);
                        assert_eq!(ny, (y + 1) % grid.rows());
                    }
                    Direction::Left => {
                        assert_eq!(ny, y);
                        assert_eq!(nx, (x + grid.cols() - 1) % grid.cols());
                    }
                    Direction::Right => {
                        assert_eq!(ny, y);
                        assert_eq!(nx, (x + 1) % grid.cols());
                    }
                }
            }
        }
    }

    #[test]
    fn corner_wraps_both_ways() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.step(0, Direction::Left), 2);
        assert_eq!(grid.step(0, Direction::Up), 6);
        assert_eq!(grid.step(8, Direction::Right), 6);
        assert_eq!(grid.step(8, Direction::Down), 2);
    }

    #[test]
    fn single_cell_grid_steps_onto_itself() {
        let grid = Grid::new(1, 1).unwrap();
        for direction in Direction::ALL {
            assert_eq!(grid.step(0, direction), 0);
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(Grid::new(0, 5), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(Grid::new(5, 0), Err(EngineError::InvalidConfig(_))));
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn adjacency_includes_wrapped_neighbours() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(grid.are_adjacent(0, 3));
        assert!(grid.are_adjacent(0, 12));
        assert!(!grid.are_adjacent(0, 5));
    }
}
