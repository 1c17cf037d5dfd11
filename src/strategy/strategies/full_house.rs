use super::prelude::*;

/// Finds the first house with a single unsolved cell and assigns the one
/// missing digit. Houses are scanned rows, then columns, then blocks.
pub(crate) fn find_full_house(board: &Board) -> Option<Deduction> {
    for house in House::all() {
        let mut unsolved = house.cells().filter(|&cell| board.grid().value(cell).is_none());
        let cell = match (unsolved.next(), unsolved.next()) {
            (Some(cell), None) => cell,
            _ => continue,
        };
        let missing = Set::ALL.without(board.house_values(house));
        // more than one missing digit means the givens already conflict;
        // the smallest is assigned and the contradiction surfaces after
        match missing.smallest() {
            Some(digit) => return Some(Deduction::FullHouse { cell, digit }),
            None => continue,
        }
    }
    None
}
