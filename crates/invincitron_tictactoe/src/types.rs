//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every way to win, in scan order: rows, then columns, then diagonals.
#[rustfmt::skip]
pub const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Each corner paired with its geometric opposite.
pub const CORNERS: [(usize, usize); 4] = [(0, 8), (2, 6), (6, 2), (8, 0)];

/// Each edge midpoint paired with its opposite.
pub const SIDES: [(usize, usize); 4] = [(1, 7), (3, 5), (5, 3), (7, 1)];

/// The center cell.
pub const CENTER: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Single-character rendering: `X`, `O` or `_`.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from explicit squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell, or `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell is in range and unmarked.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Checks whether `cell` holds `mark`.
    pub fn holds(&self, cell: usize, mark: Mark) -> bool {
        self.get(cell) == Some(Square::Occupied(mark))
    }

    /// Unmarked cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&cell| self.is_empty(cell))
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Marks a cell. Only the game loop writes to the board, after validating the cell.
    pub(crate) fn place(&mut self, cell: usize, mark: Mark) {
        if let Some(square) = self.squares.get_mut(cell) {
            *square = Square::Occupied(mark);
        }
    }

    /// Renders the board with the 1-9 key legend beside each row.
    pub fn legend(&self) -> String {
        let mut out = String::new();
        for (index, row) in self.squares.chunks(3).enumerate() {
            let cells: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            let keys: Vec<String> = (1..=3).map(|k| (index * 3 + k).to_string()).collect();
            out.push_str(&format!("{}  {}\n", cells.join(" "), keys.join(" ")));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.squares.chunks(3).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("expected 9 cells, found {found}")]
    WrongLength {
        /// Cells actually given.
        found: usize,
    },

    /// A character that is not `X`, `O`, `_` or `.`.
    #[display("unrecognised cell {cell:?}")]
    InvalidCell {
        /// The offending character.
        cell: char,
    },
}

/// Parses nine cells such as `"XX_ _O_ ___"`; whitespace is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != CELLS {
            return Err(BoardParseError::WrongLength { found: cells.len() });
        }

        let mut squares = [Square::Empty; CELLS];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                '_' | '.' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell { cell: other }),
            };
        }
        Ok(Self::from_squares(squares))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_tables_are_symmetric() {
        for (corner, opposite) in CORNERS {
            assert!(CORNERS.contains(&(opposite, corner)));
        }
        for (side, opposite) in SIDES {
            assert!(SIDES.contains(&(opposite, side)));
        }
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_ _O_ ___".parse().unwrap();
        assert!(board.holds(0, Mark::X));
        assert!(board.holds(4, Mark::O));
        assert_eq!(board.empty_cells().count(), 6);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 2 })
        );
        assert_eq!(
            "XX_______Q".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 10 })
        );
        assert_eq!(
            "XX______Q".parse::<Board>(),
            Err(BoardParseError::InvalidCell { cell: 'Q' })
        );
    }

    #[test]
    fn test_from_squares_matches_parse() {
        let mut squares = [Square::Empty; CELLS];
        squares[0] = Square::Occupied(Mark::X);
        squares[4] = Square::Occupied(Mark::O);
        assert_eq!(Board::from_squares(squares), "X__ _O_ ___".parse::<Board>().unwrap());
    }

    #[test]
    fn test_parse_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new("X".parse::<Board>().unwrap_err());
        assert_eq!(err.to_string(), "expected 9 cells, found 1");
        assert!(std::error::Error::source(&*err).is_none());
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(board.is_empty(8));
        assert!(!board.is_empty(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_display_and_legend() {
        let board: Board = "X__ _O_ __X".parse().unwrap();
        assert_eq!(board.to_string(), "X _ _\n_ O _\n_ _ X");
        assert_eq!(board.legend(), "X _ _  1 2 3\n_ O _  4 5 6\n_ _ X  7 8 9\n");
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
    }
}
