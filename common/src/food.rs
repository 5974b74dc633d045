use crate::constants::MAX_FOOD_PLACEMENT_ATTEMPTS;
use crate::{Cell, EngineError, FoodPolicy};
use rand::Rng;

/// Pick an empty cell for new food.
///
/// Samples uniformly over the whole board up to `MAX_FOOD_PLACEMENT_ATTEMPTS`
/// times. Under `FoodPolicy::RandomThenScan` an exhausted budget falls back to
/// the first empty cell in index order, so only a genuinely full board fails.
/// The returned cell is empty at call time; the caller marks it `Food`.
pub fn place_food<R: Rng + ?Sized>(
    board: &[Cell],
    policy: FoodPolicy,
    rng: &mut R,
) -> Result<usize, EngineError> {
    if !board.is_empty() {
        for _ in 0..MAX_FOOD_PLACEMENT_ATTEMPTS {
            let candidate = rng.gen_range(0..board.len());
            if board[candidate] == Cell::Empty {
                return Ok(candidate);
            }
        }
    }

    match policy {
        FoodPolicy::RandomRetry => {}
        FoodPolicy::RandomThenScan => {
            if let Some(index) = first_empty_cell(board) {
                return Ok(index);
            }
        }
    }

    log::warn!(
        "No empty cell found for food on a board of {} cells ({:?})",
        board.len(),
        policy
    );
    Err(EngineError::BoardFullOrUnlucky {
        attempts: MAX_FOOD_PLACEMENT_ATTEMPTS,
    })
}

pub fn first_empty_cell(board: &[Cell]) -> Option<usize> {
    board.iter().position(|cell| *cell == Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PseudoRandom;

    #[test]
    fn picks_only_empty_cells() {
        let mut board = vec![Cell::Body; 25];
        board[3] = Cell::Empty;
        board[17] = Cell::Empty;
        board[9] = Cell::Food;

        let mut rng = PseudoRandom::new(11);
        for _ in 0..50 {
            let index = place_food(&board, FoodPolicy::RandomRetry, &mut rng).unwrap();
            assert!(index == 3 || index == 17);
        }
    }

    #[test]
    fn full_board_fails_after_budget() {
        let board = vec![Cell::Body; 9];
        let mut rng = PseudoRandom::new(5);

        let err = place_food(&board, FoodPolicy::RandomRetry, &mut rng).unwrap_err();
        assert_eq!(err, EngineError::BoardFullOrUnlucky { attempts: 500 });

        let err = place_food(&board, FoodPolicy::RandomThenScan, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::BoardFullOrUnlucky { .. }));
    }

    /// An rng that always lands on cell 0 can never succeed by sampling alone.
    struct Stuck;

    impl rand::RngCore for Stuck {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn scan_fallback_finds_the_last_free_cell() {
        let mut board = vec![Cell::Body; 16];
        board[14] = Cell::Empty;

        assert!(place_food(&board, FoodPolicy::RandomRetry, &mut Stuck).is_err());
        assert_eq!(place_food(&board, FoodPolicy::RandomThenScan, &mut Stuck), Ok(14));
    }

    #[test]
    fn first_empty_cell_skips_food_and_body() {
        let board = [Cell::Body, Cell::Food, Cell::Empty, Cell::Empty];
        assert_eq!(first_empty_cell(&board), Some(2));
        assert_eq!(first_empty_cell(&[Cell::Body]), None);
    }
}
