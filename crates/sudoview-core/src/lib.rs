//! Core board vocabulary for Sudoview.
//!
//! This crate provides the small set of types the rest of the workspace is
//! built on:
//!
//! - [`Digit`]: a cell value in the range 1-9, with empty expressed as
//!   `Option<Digit>::None` rather than a sentinel zero
//! - [`Position`]: a checked (x, y) board coordinate in 0-8×0-8
//! - [`DigitGrid`]: a 9×9 grid of optional digits with a compact 81-character
//!   text notation
//!
//! # Examples
//!
//! ```
//! use sudoview_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Digit::new(5));
//!
//! assert_eq!(grid[Position::new(0, 0)], Digit::new(5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseDigitGridError},
    position::Position,
};
