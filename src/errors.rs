//! Errors that may be encountered when reading a puzzle from a string

/// An invalid entry encountered while parsing a puzzle line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The offending character
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line).
///
/// A puzzle line must consist of exactly 81 characters, each a digit
/// `'1'..='9'` or one of the blank placeholders `'0'` and `'.'`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Line is not 81 characters long
    #[error("puzzle line should have length 81, found {0}")]
    WrongLength(usize),
    /// Line contains a character that is neither digit nor placeholder
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
}
