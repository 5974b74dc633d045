use crate::food::place_food;
use crate::{Direction, EngineError, FoodPolicy, GameConfig, Grid, Snake};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    Food,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Paused,
    Running,
    GameOver,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Tick,
    Turn { direction: Direction },
    Pause,
    Resume,
    Reset,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SnakeTurned { direction: Direction },
    Paused,
    /// The presentation layer should take input focus.
    Resumed,
    HeadAdvanced { head: usize, ate_food: bool },
    FoodSpawned { index: usize },
    GameOver { head: usize },
    Reset,
}

/// Result of reducing a command that changed the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: GameSession,
    pub events: Vec<GameEvent>,
}

// Serializable state for snapshots
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    board: Vec<Cell>,
    snake: Snake,
    food: Option<usize>,
    direction: Direction,
    status: GameStatus,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = config.grid()?;
        let mut board = vec![Cell::Empty; grid.len()];
        board[config.start_index] = Cell::Body;

        Ok(GameSession {
            grid,
            board,
            snake: Snake::new(config.start_index),
            food: None,
            direction: Direction::Right,
            status: GameStatus::Paused,
        })
    }

    /// Build a session at an arbitrary position, head first.
    pub fn from_parts(
        grid: Grid,
        segments: &[usize],
        direction: Direction,
        food: Option<usize>,
        status: GameStatus,
    ) -> Result<Self, EngineError> {
        let snake = Snake::from_segments(segments.iter().copied().collect::<VecDeque<_>>())
            .ok_or_else(|| EngineError::SessionMismatch("snake has no segments".to_string()))?;

        let mut board = vec![Cell::Empty; grid.len()];
        for index in snake.segments() {
            if !grid.contains(index) {
                return Err(EngineError::SessionMismatch(format!(
                    "segment {index} is outside the grid"
                )));
            }
            board[index] = Cell::Body;
        }
        if let Some(index) = food {
            if !grid.contains(index) || board[index] != Cell::Empty {
                return Err(EngineError::SessionMismatch(format!(
                    "food cell {index} is not a free cell"
                )));
            }
            board[index] = Cell::Food;
        }

        let session = GameSession { grid, board, snake, food, direction, status };
        session.check_invariants()?;
        Ok(session)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn board(&self) -> &[Cell] {
        &self.board
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.board.get(index).copied().unwrap_or_default()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> usize {
        self.snake.head()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Option<usize> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn body_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Body)
            .map(|(index, _)| index)
    }

    /// Verify the board agrees with the snake and the food marker.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let mismatch = |msg: String| Err(EngineError::SessionMismatch(msg));

        if self.board.len() != self.grid.len() {
            return mismatch(format!(
                "board has {} cells, grid has {}",
                self.board.len(),
                self.grid.len()
            ));
        }

        let mut seen = HashSet::new();
        for index in self.snake.segments() {
            if !seen.insert(index) {
                return mismatch(format!("segment {index} appears twice"));
            }
        }
        let body: HashSet<usize> = self.body_cells().collect();
        if body != seen {
            return mismatch("body cells differ from snake segments".to_string());
        }

        let segments: Vec<usize> = self.snake.segments().collect();
        if let Some(pair) = segments.windows(2).find(|w| !self.grid.are_adjacent(w[0], w[1])) {
            return mismatch(format!("segments {} and {} are not adjacent", pair[0], pair[1]));
        }

        let food_cells: Vec<usize> = self
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Food)
            .map(|(index, _)| index)
            .collect();
        if food_cells != self.food.into_iter().collect::<Vec<_>>() {
            return mismatch(format!(
                "food marker {:?} differs from food cells {:?}",
                self.food, food_cells
            ));
        }
        Ok(())
    }

    /// Compute the session that follows `command` without touching `self`.
    ///
    /// `Ok(None)` means the command has no effect in the current state.
    /// `Reset` needs the configuration and is handled by the engine, so it
    /// reduces to `Ok(None)` here.
    pub fn reduce<R: Rng + ?Sized>(
        &self,
        command: &GameCommand,
        policy: FoodPolicy,
        rng: &mut R,
    ) -> Result<Option<Step>, EngineError> {
        let mut next = self.clone();
        let mut out: Vec<GameEvent> = Vec::new();

        match command {
            GameCommand::Tick => {
                if self.status != GameStatus::Running {
                    return Ok(None);
                }

                let new_head = self.grid.step(self.head(), self.direction);
                match self.board[new_head] {
                    Cell::Body => {
                        next.apply_event(GameEvent::GameOver { head: new_head }, Some(&mut out));
                        return Ok(Some(Step { session: next, events: out }));
                    }
                    Cell::Food => {
                        next.apply_event(
                            GameEvent::HeadAdvanced { head: new_head, ate_food: true },
                            Some(&mut out),
                        );
                    }
                    Cell::Empty => {
                        next.apply_event(
                            GameEvent::HeadAdvanced { head: new_head, ate_food: false },
                            Some(&mut out),
                        );
                    }
                }

                if next.food.is_none() {
                    let index = place_food(&next.board, policy, rng)?;
                    next.apply_event(GameEvent::FoodSpawned { index }, Some(&mut out));
                }
            }

            GameCommand::Turn { direction } => {
                if self.status != GameStatus::GameOver && self.direction.can_turn_to(direction) {
                    next.apply_event(GameEvent::SnakeTurned { direction: *direction }, Some(&mut out));
                }
            }

            GameCommand::Pause => {
                if self.status == GameStatus::Running {
                    next.apply_event(GameEvent::Paused, Some(&mut out));
                }
            }

            GameCommand::Resume => {
                if self.status == GameStatus::Paused {
                    next.apply_event(GameEvent::Resumed, Some(&mut out));
                }
            }

            GameCommand::Reset => {}
        }

        if out.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Step { session: next, events: out }))
        }
    }

    pub fn apply_event(&mut self, event: GameEvent, out: Option<&mut Vec<GameEvent>>) {
        if let Some(out) = out {
            out.push(event.clone());
        }

        match event {
            GameEvent::SnakeTurned { direction } => {
                self.direction = direction;
            }

            GameEvent::Paused => {
                self.status = GameStatus::Paused;
            }

            GameEvent::Resumed => {
                self.status = GameStatus::Running;
            }

            GameEvent::HeadAdvanced { head, ate_food } => {
                self.advance_head(head, ate_food);
            }

            GameEvent::FoodSpawned { index } => {
                self.board[index] = Cell::Food;
                self.food = Some(index);
            }

            GameEvent::GameOver { .. } => {
                self.status = GameStatus::GameOver;
            }

            GameEvent::Reset => {}
        }
    }

    /// Move the head onto `new_head`. Without food the tail is dropped so the
    /// length stays the same; with food the tail stays and the snake grows.
    pub fn advance_head(&mut self, new_head: usize, ate_food: bool) {
        self.snake.push_head(new_head);
        self.board[new_head] = Cell::Body;

        if ate_food {
            self.food = None;
        } else if let Some(tail) = self.snake.pop_tail() {
            self.board[tail] = Cell::Empty;
        }
    }
}
