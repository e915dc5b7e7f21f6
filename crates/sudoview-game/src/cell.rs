use sudoview_core::Digit;

/// The state of a single board cell.
///
/// `Given` cells carry the digits served by the puzzle source and are
/// immutable for the session; `Filled` cells carry player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// A digit pre-filled by the puzzle source; immutable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    #[default]
    Empty,
}

impl CellState {
    /// Returns `true` for cells served by the puzzle source.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns `true` for cells without a digit.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the digit shown in this cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
