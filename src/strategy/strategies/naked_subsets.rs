use super::prelude::*;

/// Finds N cells of a house (N = 2 or 3) whose candidate sets are all equal
/// and of size N; the shared digits leave every other cell of the house.
///
/// Only exact matches count: a triple must be three cells showing the
/// identical three-digit set. Candidate groups are probed in order of their
/// first member cell.
pub(crate) fn find_naked_subset(board: &Board) -> Option<Deduction> {
    for house in House::all() {
        let unsolved: Vec<Cell> = house
            .cells()
            .filter(|&cell| board.grid().value(cell).is_none())
            .collect();

        let mut probed: Vec<Set<Digit>> = Vec::new();
        for &anchor in &unsolved {
            let digits = board.candidates_of(anchor);
            if digits.len() < 2 || digits.len() > 3 || probed.contains(&digits) {
                continue;
            }
            probed.push(digits);

            let members: Vec<Cell> = unsolved
                .iter()
                .copied()
                .filter(|&cell| board.candidates_of(cell) == digits)
                .collect();
            if members.len() != digits.len() as usize {
                continue;
            }

            let eliminated: Vec<Candidate> = unsolved
                .iter()
                .copied()
                .filter(|cell| !members.contains(cell))
                .flat_map(|cell| {
                    (board.candidates_of(cell) & digits)
                        .into_iter()
                        .map(move |digit| Candidate { cell, digit })
                })
                .collect();
            if eliminated.is_empty() {
                continue;
            }

            return Some(Deduction::NakedSubset {
                house,
                cells: members,
                digits: digits.into_iter().collect(),
                eliminated,
            });
        }
    }
    None
}
