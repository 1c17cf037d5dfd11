use super::prelude::*;

/// Finds N digits (N = 2 or 3) of a house that fit only into the same N
/// cells; every other candidate leaves those cells.
///
/// Exact matches only: each digit of the group must occupy precisely the
/// group's cells. Digit groups are probed in ascending order of their
/// smallest digit.
pub(crate) fn find_hidden_subset(board: &Board) -> Option<Deduction> {
    for house in House::all() {
        let mut probed = Set::<Digit>::NONE;
        for digit in Digit::all() {
            if probed.contains(digit) {
                continue;
            }
            let cells = board.house_candidate_cells(house, digit);
            if cells.len() < 2 || cells.len() > 3 {
                continue;
            }

            // digits confined to exactly the same cells
            let group: Vec<Digit> = Digit::all()
                .filter(|&other| board.house_candidate_cells(house, other) == cells)
                .collect();
            for &member in &group {
                probed |= member;
            }
            if group.len() != cells.len() {
                continue;
            }

            let group_set = group.iter().fold(Set::NONE, |set, &digit| set | digit);
            let eliminated: Vec<Candidate> = cells
                .iter()
                .copied()
                .flat_map(|cell| {
                    board
                        .candidates_of(cell)
                        .without(group_set)
                        .into_iter()
                        .map(move |digit| Candidate { cell, digit })
                })
                .collect();
            if eliminated.is_empty() {
                continue;
            }

            return Some(Deduction::HiddenSubset {
                house,
                cells,
                digits: group,
                eliminated,
            });
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hidden_pair_strips_foreign_candidates() {
        // digits 1 and 2 are barred from all of row 0 except cells 0 and
        // 1, which still carry a full candidate set
        let mut line = ".".repeat(81);
        line.replace_range(14..16, "12"); // r1c5, r1c6
        line.replace_range(23..25, "21"); // r2c5, r2c6
        line.replace_range(29..30, "1"); // r3c2
        line.replace_range(38..39, "2"); // r4c2
        let board = Board::from_str_line(&line).unwrap();

        let deduction = find_hidden_subset(&board).unwrap();
        match &deduction {
            Deduction::HiddenSubset {
                house,
                cells,
                digits,
                eliminated,
            } => {
                assert_eq!(*house, House::from(Row::new(0)));
                assert_eq!(cells, &[Cell::new(0), Cell::new(1)]);
                assert_eq!(digits, &[Digit::new(1), Digit::new(2)]);
                // both cells lose the seven digits outside the pair
                assert_eq!(eliminated.len(), 14);
                assert!(eliminated
                    .iter()
                    .all(|c| c.digit >= Digit::new(3) && c.cell.get() <= 1));
            }
            other => panic!("unexpected deduction {:?}", other),
        }
    }

    #[test]
    fn fully_reduced_pair_is_not_reported_again() {
        let mut line = ".".repeat(81);
        line.replace_range(14..16, "12");
        line.replace_range(23..25, "21");
        line.replace_range(29..30, "1");
        line.replace_range(38..39, "2");
        let mut board = Board::from_str_line(&line).unwrap();
        let deduction = find_hidden_subset(&board).unwrap();
        board.apply(&deduction);
        // the pair cells now hold nothing but {1,2}; no eliminations remain
        assert_eq!(find_hidden_subset(&board), None);
    }
}
