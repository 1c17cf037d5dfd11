//! The technique engine that mimics human approaches to sudoku solving,
//! for hinting at possible moves and grading difficulty.
//!
//! A [`Board`] tracks values and per-cell candidates, [`next_step`] finds
//! the single easiest applicable deduction, and the [`Grader`] replays the
//! engine to completion to derive a [`Difficulty`]. All deductions are
//! recorded in a [`Trace`] and can be inspected afterwards.
//!
//! Human-style strategies are much slower than plain backtracking; the
//! point of this module is the audit trail and the difficulty ordering,
//! not solving speed. For a bare solution see [`backtrack`](crate::backtrack).

mod board;
pub mod deduction;
mod solver;
mod strategies;

pub use self::board::Board;
pub use self::deduction::{Deduction, Difficulty, Technique, Trace};
pub use self::solver::{next_step, Grader, Grading};
