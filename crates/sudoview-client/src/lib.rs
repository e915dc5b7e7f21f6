//! Puzzle retrieval from an online puzzle service.
//!
//! The service answers `GET <endpoint>?difficulty=<level>` with a JSON object
//! whose `board` field holds a 9×9 array of integers, `0` meaning empty. The
//! payload is treated as untrusted input: [`PuzzleClient::fetch`] decodes it
//! into a DTO and validates shape and value range before handing out a
//! [`DigitGrid`]. A single transient transport failure is retried once; any
//! other failure is returned to the caller, for whom it is fatal — the
//! application cannot start without a board.

use std::{fmt, time::Duration};

use log::{debug, warn};
use serde::Deserialize;
use sudoview_core::{Digit, DigitGrid, Position};

/// The puzzle service used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://sugoku.herokuapp.com/board";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Difficulty levels understood by the puzzle service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Mostly filled boards.
    Easy,
    /// Medium boards.
    Medium,
    /// Sparse boards.
    Hard,
    /// Service-chosen difficulty.
    #[default]
    Random,
}

impl Difficulty {
    /// Returns the value sent as the `difficulty` query parameter.
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}

/// Wire shape of the service response.
#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Vec<Vec<u8>>,
}

/// A served board that is not a 9×9 grid of values 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoard {
    /// The `board` array does not have exactly 9 rows.
    #[display("expected 9 rows, got {rows}")]
    RowCount {
        /// Number of rows in the payload.
        rows: usize,
    },
    /// A row does not have exactly 9 columns.
    #[display("row {row} has {cols} columns, expected 9")]
    ColumnCount {
        /// Row index (0-8).
        row: usize,
        /// Number of columns in that row.
        cols: usize,
    },
    /// A cell value lies outside 0-9.
    #[display("cell ({x}, {y}) holds {value}, outside 0-9")]
    ValueRange {
        /// Column index (0-8).
        x: usize,
        /// Row index (0-8).
        y: usize,
        /// The offending value.
        value: u8,
    },
}

/// Errors fetching a puzzle from the service.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FetchError {
    /// The request failed or timed out.
    #[display("request failed: {_0}")]
    Transport(#[from] Box<ureq::Error>),
    /// The response body is not the expected JSON shape.
    #[display("malformed response body: {_0}")]
    Decode(#[from] std::io::Error),
    /// The decoded board fails shape or range validation.
    #[display("invalid board: {_0}")]
    InvalidBoard(#[from] InvalidBoard),
}

/// Blocking client for the puzzle service.
///
/// # Example
///
/// ```no_run
/// use sudoview_client::{DEFAULT_ENDPOINT, Difficulty, PuzzleClient};
///
/// let client = PuzzleClient::new(DEFAULT_ENDPOINT);
/// let grid = client.fetch(Difficulty::Random)?;
/// assert!(grid.filled_count() > 0);
/// # Ok::<(), sudoview_client::FetchError>(())
/// ```
#[derive(Debug)]
pub struct PuzzleClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl PuzzleClient {
    /// Creates a client for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// Fetches one puzzle, blocking until the service answers.
    ///
    /// Transport failures are retried once before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails twice, the body cannot be
    /// decoded, or the decoded board is not a 9×9 grid of values 0-9.
    pub fn fetch(&self, difficulty: Difficulty) -> Result<DigitGrid, FetchError> {
        debug!("fetching puzzle from {} (difficulty={difficulty})", self.endpoint);
        let response = match self.request(difficulty) {
            Ok(response) => response,
            Err(err @ FetchError::Transport(_)) => {
                warn!("puzzle fetch failed, retrying once: {err}");
                self.request(difficulty)?
            }
            Err(err) => return Err(err),
        };
        Ok(grid_from_rows(&response.board)?)
    }

    fn request(&self, difficulty: Difficulty) -> Result<BoardResponse, FetchError> {
        let response = self
            .agent
            .get(&self.endpoint)
            .query("difficulty", difficulty.query_value())
            .call()
            .map_err(|err| FetchError::Transport(Box::new(err)))?;
        Ok(response.into_json()?)
    }
}

/// Validates the decoded rows and converts them into a grid, `0` → empty.
fn grid_from_rows(rows: &[Vec<u8>]) -> Result<DigitGrid, InvalidBoard> {
    if rows.len() != 9 {
        return Err(InvalidBoard::RowCount { rows: rows.len() });
    }
    let mut grid = DigitGrid::new();
    for (y, row) in rows.iter().enumerate() {
        if row.len() != 9 {
            return Err(InvalidBoard::ColumnCount {
                row: y,
                cols: row.len(),
            });
        }
        for (x, &value) in row.iter().enumerate() {
            let digit = match value {
                0 => None,
                _ => Some(Digit::new(value).ok_or(InvalidBoard::ValueRange { x, y, value })?),
            };
            #[expect(clippy::cast_possible_truncation, reason = "x and y are < 9")]
            grid.set(Position::new(x as u8, y as u8), digit);
        }
    }
    Ok(grid)
}
