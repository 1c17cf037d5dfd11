#![warn(missing_docs)]
//! Logical difficulty grading and hinting for 9×9 sudokus
//!
//! ## Overview
//!
//! This library classifies how hard a sudoku is for a *human* solver by
//! replaying a fixed set of solving techniques — full houses, hidden and
//! naked singles, locked candidates, pair/triple subsets, X-Wing and
//! Y-Wing — and recording every deduction along the way. The same engine
//! answers single-step hint queries, and a bounded backtracking search
//! produces a plain solution when the techniques stall.
//!
//! Grading is fully deterministic: the same puzzle line always yields the
//! same difficulty, the same steps and the same payloads.
//!
//! ## Example
//!
//! ```
//! use sudoku_grader::{Board, Difficulty, Grader};
//!
//! // a solved grid with a single missing digit
//! let line = "123406789456789123789123456231564897564897231897231564312645978645978312978312645";
//!
//! let board = Board::from_str_line(line)?;
//! let grading = Grader::new(board).grade();
//!
//! assert!(grading.is_solved());
//! assert_eq!(grading.difficulty, Difficulty::Beginner);
//! assert_eq!(grading.trace.len(), 1);
//! # Ok::<(), sudoku_grader::errors::LineParseError>(())
//! ```
//!
//! Hints work on an untouched board and can be committed explicitly:
//!
//! ```
//! use sudoku_grader::{next_hint, Board};
//!
//! let line = "123406789456789123789123456231564897564897231897231564312645978645978312978312645";
//! let mut board = Board::from_str_line(line)?;
//!
//! let hint = next_hint(&board).expect("one step left");
//! board.apply(&hint);
//! assert!(board.is_solved());
//! # Ok::<(), sudoku_grader::errors::LineParseError>(())
//! ```

pub mod backtrack;
pub mod bitset;
pub mod board;
pub mod errors;
mod helper;
mod hint;
pub mod strategy;

pub use crate::bitset::Set;
pub use crate::board::{Candidate, Cell, Digit, Grid};
pub use crate::helper::CellArray;
pub use crate::hint::next_hint;
pub use crate::strategy::{Board, Deduction, Difficulty, Grader, Grading, Technique, Trace};
