//! Single-step hinting.
//!
//! Answers "what is the next deducible step" without running a full
//! grading session.

use crate::strategy::{self, Board, Deduction};

/// Returns the next deduction a human solver could make, or `None` if the
/// implemented techniques are exhausted.
///
/// The board is only read, never altered: asking for a hint does not
/// commit it, so repeated calls against the same board return the same
/// step. A caller that wants to advance the puzzle applies the returned
/// deduction via [`Board::apply`].
pub fn next_hint(board: &Board) -> Option<Deduction> {
    strategy::next_step(board)
}
