use crate::board::{Cell, Digit};
use crate::errors::{InvalidEntry, LineParseError};

use std::fmt;

/// The values of a 9×9 sudoku, row-major. `0` marks an unknown cell.
///
/// A `Grid` is only the plain value layer. Candidate bookkeeping lives in
/// [`Board`](crate::Board), which is built from a `Grid`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid(pub(crate) [u8; 81]);

impl Grid {
    /// Reads a grid in line format: exactly 81 characters, row by row,
    /// `'1'..='9'` for clues and `'0'` or `'.'` for unknown cells.
    ///
    /// Any other length or character fails with a [`LineParseError`].
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut values = [0; 81];
        let mut n_chars = 0_usize;
        for (idx, ch) in s.chars().enumerate() {
            n_chars += 1;
            if idx >= 81 {
                continue;
            }
            values[idx] = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: idx as u8,
                        ch,
                    }))
                }
            };
        }
        if n_chars != 81 {
            return Err(LineParseError::WrongLength(n_chars));
        }
        Ok(Grid(values))
    }

    /// Constructs a grid directly from 81 cell values.
    ///
    /// Returns `None` if any value is above 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Option<Grid> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Some(Grid(bytes)),
            false => None,
        }
    }

    /// Emits the grid in line format, using `'.'` for unknown cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&value| match value {
                0 => '.',
                _ => (b'0' + value) as char,
            })
            .collect()
    }

    /// Returns the value of the given cell, if it is known.
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Sets or clears the value of the given cell.
    pub(crate) fn set(&mut self, cell: Cell, value: Option<Digit>) {
        self.0[cell.as_index()] = value.map_or(0, Digit::get);
    }

    /// Iterator over all cells, `None` for unknown ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&value| Digit::new_checked(value))
    }

    /// Number of known cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks whether every cell has a value. Does not check validity.
    pub fn is_filled(&self) -> bool {
        self.0.iter().all(|&value| value != 0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, &value) in self.0.iter().enumerate() {
            let (row, col) = (idx / 9, idx % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?,
                (3, 0) | (6, 0) => write!(f, "\n\n")?,
                (_, 0) if row != 0 => writeln!(f)?,
                _ => {}
            }
            match value {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = <&str as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_str_line(line).map_err(serde::de::Error::custom)
    }
}
