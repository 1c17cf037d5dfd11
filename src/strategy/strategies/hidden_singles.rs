use super::prelude::*;

/// Finds a digit with a single candidate cell within a block.
///
/// Kept separate from the row/column scan because a single inside a block
/// is easier to spot for a human and therefore graded one tier lower.
pub(crate) fn find_hidden_single_block(board: &Board) -> Option<Deduction> {
    for block in Block::all() {
        let house = House::from(block);
        for digit in Digit::all() {
            if let Some(cell) = sole_position(board, house, digit) {
                return Some(Deduction::HiddenSingle { cell, digit, house });
            }
        }
    }
    None
}

/// Finds a digit with a single candidate cell within a row or column.
/// All rows are scanned before all columns.
pub(crate) fn find_hidden_single_line(board: &Board) -> Option<Deduction> {
    for line in Line::all() {
        let house = House::from(line);
        for digit in Digit::all() {
            if let Some(cell) = sole_position(board, house, digit) {
                return Some(Deduction::HiddenSingle { cell, digit, house });
            }
        }
    }
    None
}

fn sole_position(board: &Board, house: House, digit: Digit) -> Option<Cell> {
    let mut locations = house
        .cells()
        .filter(|&cell| board.candidates_of(cell).contains(digit));
    match (locations.next(), locations.next()) {
        (Some(cell), None) => Some(cell),
        _ => None,
    }
}
