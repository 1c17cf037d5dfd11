use super::prelude::*;

/// Finds the first cell, in ascending order, with exactly one candidate.
pub(crate) fn find_naked_single(board: &Board) -> Option<Deduction> {
    for cell in Cell::all() {
        // Err(_) means the set is empty: solved cell or contradiction, skip
        if let Ok(Some(digit)) = board.candidates_of(cell).unique() {
            return Some(Deduction::NakedSingle { cell, digit });
        }
    }
    None
}
