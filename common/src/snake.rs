use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// A turn is accepted only onto the perpendicular axis, which rules out
    /// both a 180° reversal and a same-direction request.
    pub fn can_turn_to(&self, new_direction: &Direction) -> bool {
        self.axis() != new_direction.axis()
    }
}

/// Snake body as cell indices, head first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub(crate) segments: VecDeque<usize>,
}

impl Snake {
    pub fn new(head: usize) -> Self {
        Snake { segments: VecDeque::from([head]) }
    }

    pub(crate) fn from_segments(segments: VecDeque<usize>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Snake { segments })
        }
    }

    pub fn head(&self) -> usize {
        self.segments[0]
    }

    pub fn tail(&self) -> usize {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.segments.contains(&index)
    }

    pub fn segments(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().copied()
    }

    pub(crate) fn push_head(&mut self, index: usize) {
        self.segments.push_front(index);
    }

    /// Removes the tail unless it is also the head.
    pub(crate) fn pop_tail(&mut self) -> Option<usize> {
        if self.segments.len() > 1 {
            self.segments.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_only_onto_perpendicular_axis() {
        let right = Direction::Right;
        assert!(!right.can_turn_to(&Direction::Left));
        assert!(!right.can_turn_to(&Direction::Right));
        assert!(right.can_turn_to(&Direction::Up));
        assert!(right.can_turn_to(&Direction::Down));

        let up = Direction::Up;
        assert!(!up.can_turn_to(&Direction::Down));
        assert!(up.can_turn_to(&Direction::Left));
    }

    #[test]
    fn opposites_pair_up() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(&d.opposite()));
            assert_eq!(d.axis(), d.opposite().axis());
        }
    }

    #[test]
    fn single_segment_tail_is_kept() {
        let mut snake = Snake::new(4);
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
        snake.push_head(5);
        assert_eq!(snake.pop_tail(), Some(4));
        assert_eq!(snake.head(), 5);
        assert_eq!(snake.tail(), 5);
    }
}
