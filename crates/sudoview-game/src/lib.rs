//! Board state for Sudoview.
//!
//! A [`Board`] owns the mutable 9×9 state of a session: cells served by the
//! puzzle source are [`CellState::Given`] and immutable, everything else can
//! be filled and cleared by the player. Both mutation paths share a single
//! given-cell guard, so a given cell can never be altered regardless of the
//! sequence of operations attempted on it.

mod board;
mod cell;

pub use self::{board::Board, cell::CellState};

/// Errors from board mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Attempted to modify a cell served by the puzzle source.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}
