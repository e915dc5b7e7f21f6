use sudoview_core::{Digit, DigitGrid, Position};

use crate::{BoardError, CellState};

/// An editable Sudoku board.
///
/// Constructed once from the grid served by the puzzle source; digits present
/// in that grid become immutable [`CellState::Given`] cells, everything else
/// starts [`CellState::Empty`]. The board is the single owner of the mutable
/// state — there are no ambient globals — and both mutation operations go
/// through one guard that rejects writes to given cells.
///
/// # Example
///
/// ```
/// use sudoview_core::{Digit, DigitGrid, Position};
/// use sudoview_game::{Board, BoardError};
///
/// let givens: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// let mut board = Board::new(&givens);
///
/// // The served cell is locked, its neighbor is editable.
/// assert_eq!(
///     board.set_digit(Position::new(0, 0), Digit::D7),
///     Err(BoardError::CannotModifyGivenCell)
/// );
/// board.set_digit(Position::new(1, 0), Digit::D3).unwrap();
/// assert_eq!(board.cell(Position::new(1, 0)).as_digit(), Some(Digit::D3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
}

impl Board {
    /// Creates a board from the served grid.
    #[must_use]
    pub fn new(givens: &DigitGrid) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = givens[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// The shared mutation guard: editable cells only.
    fn slot_mut(&mut self, pos: Position) -> Result<&mut CellState, BoardError> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return Err(BoardError::CannotModifyGivenCell);
        }
        Ok(cell)
    }

    /// Places a player digit at the given position.
    ///
    /// Filled cells are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CannotModifyGivenCell`] if the cell was served
    /// by the puzzle source.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), BoardError> {
        *self.slot_mut(pos)? = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at the given position.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CannotModifyGivenCell`] if the cell was served
    /// by the puzzle source.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), BoardError> {
        *self.slot_mut(pos)? = CellState::Empty;
        Ok(())
    }

    /// Returns the immutable snapshot of the served puzzle.
    #[must_use]
    pub fn givens(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            if let CellState::Given(digit) = self.cell(pos) {
                grid.set(pos, Some(digit));
            }
        }
        grid
    }

    /// Returns the currently displayed grid (givens plus player input).
    #[must_use]
    pub fn current(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns the number of cells holding a digit, given or filled.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.as_digit().is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_with_corner_given() -> Board {
        let givens: DigitGrid = format!("5{}", ".".repeat(80))
            .parse()
            .expect("valid givens grid");
        Board::new(&givens)
    }

    #[test]
    fn test_new_classifies_cells() {
        let board = board_with_corner_given();
        assert_eq!(board.cell(Position::new(0, 0)), CellState::Given(Digit::D5));
        for pos in Position::ALL.into_iter().skip(1) {
            assert_eq!(board.cell(pos), CellState::Empty);
        }
    }

    #[test]
    fn test_current_equals_givens_after_construction() {
        let givens: DigitGrid =
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
                .parse()
                .expect("valid givens grid");
        let board = Board::new(&givens);
        assert_eq!(board.current(), givens);
        assert_eq!(board.givens(), givens);
        assert_eq!(board.decided_count(), givens.filled_count());
    }

    #[test]
    fn test_editable_cell_set_and_clear() {
        let mut board = board_with_corner_given();
        let pos = Position::new(1, 0);

        board.set_digit(pos, Digit::D3).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D3));

        // Overwrite without clearing first
        board.set_digit(pos, Digit::D8).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D8));

        board.clear_cell(pos).unwrap();
        assert_eq!(board.cell(pos), CellState::Empty);

        // Clearing an empty cell is a no-op
        board.clear_cell(pos).unwrap();
        assert_eq!(board.cell(pos), CellState::Empty);
    }

    #[test]
    fn test_given_cell_rejects_all_mutations() {
        let mut board = board_with_corner_given();
        let given = Position::new(0, 0);

        assert_eq!(
            board.set_digit(given, Digit::D7),
            Err(BoardError::CannotModifyGivenCell)
        );
        assert_eq!(
            board.clear_cell(given),
            Err(BoardError::CannotModifyGivenCell)
        );
        assert_eq!(board.cell(given), CellState::Given(Digit::D5));
    }

    #[test]
    fn test_player_input_does_not_leak_into_givens() {
        let mut board = board_with_corner_given();
        board.set_digit(Position::new(1, 0), Digit::D3).unwrap();

        let givens = board.givens();
        assert_eq!(givens.filled_count(), 1);
        assert_eq!(givens[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(board.current()[Position::new(1, 0)], Some(Digit::D3));
    }

    proptest! {
        // Given-cell immutability under arbitrary edit sequences.
        #[test]
        fn given_cells_survive_any_edit_sequence(
            edits in prop::collection::vec((0u8..9, 0u8..9, 0u8..=9), 0..64),
        ) {
            let givens: DigitGrid =
                "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
                    .parse()
                    .expect("valid givens grid");
            let mut board = Board::new(&givens);

            for (x, y, value) in edits {
                let pos = Position::new(x, y);
                let _ = match Digit::new(value) {
                    Some(digit) => board.set_digit(pos, digit),
                    None => board.clear_cell(pos),
                };
            }

            prop_assert_eq!(board.givens(), givens.clone());
            for pos in Position::ALL {
                if let Some(digit) = givens[pos] {
                    prop_assert_eq!(board.cell(pos), CellState::Given(digit));
                }
            }
        }
    }
}
