use super::prelude::*;

/// Finds a Y-Wing: a bivalue pivot `{a,b}` with one bivalue peer holding
/// `{a,c}` and another holding `{b,c}`. Whatever the pivot turns out to be,
/// one pincer becomes `c`, so `c` leaves every common peer of the pincers.
///
/// Pivots are scanned in ascending cell order, pincers in ascending peer
/// order; a wing without any actual elimination is skipped.
pub(crate) fn find_xy_wing(board: &Board) -> Option<Deduction> {
    for pivot in Cell::all() {
        let pivot_digits = board.candidates_of(pivot);
        if pivot_digits.len() != 2 {
            continue;
        }
        let digits: Vec<Digit> = pivot_digits.into_iter().collect();
        let (a, b) = (digits[0], digits[1]);

        let mut pincers_a: Vec<(Cell, Set<Digit>)> = vec![];
        let mut pincers_b: Vec<(Cell, Set<Digit>)> = vec![];
        for peer in pivot.peers() {
            let peer_digits = board.candidates_of(peer);
            if peer_digits.len() != 2 || peer_digits == pivot_digits {
                continue;
            }
            if peer_digits.contains(a) {
                pincers_a.push((peer, peer_digits));
            } else if peer_digits.contains(b) {
                pincers_b.push((peer, peer_digits));
            }
        }

        for &(pincer_a, digits_a) in &pincers_a {
            for &(pincer_b, digits_b) in &pincers_b {
                let shared = digits_a.without(a.as_set()) & digits_b.without(b.as_set());
                let digit = match shared.unique() {
                    Ok(Some(digit)) => digit,
                    _ => continue,
                };

                let eliminated: Vec<Candidate> = (pincer_a.peer_set() & pincer_b.peer_set())
                    .into_iter()
                    .filter(|&cell| board.candidates_of(cell).contains(digit))
                    .map(|cell| Candidate { cell, digit })
                    .collect();
                if eliminated.is_empty() {
                    continue;
                }

                return Some(Deduction::XyWing {
                    pivot,
                    pincers: [pincer_a, pincer_b],
                    digit,
                    eliminated,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    // pivot cell 0 holds {1,2}, cell 4 holds {1,3}, cell 36 holds {2,3};
    // the common peers of the pincers are cell 0 (the pivot) and cell 40
    fn wing_board() -> Board {
        let mut line = ".".repeat(81);
        line.replace_range(6..9, "456"); // r0c6..c8
        line.replace_range(10..11, "3"); // r1c1
        line.replace_range(12..13, "2"); // r1c3
        line.replace_range(28..29, "4"); // r3c1
        line.replace_range(42..45, "165"); // r4c6..c8
        line.replace_range(49..50, "7"); // r5c4
        line.replace_range(54..55, "7"); // r6c0
        line.replace_range(58..59, "8"); // r6c4
        line.replace_range(63..64, "8"); // r7c0
        line.replace_range(67..68, "9"); // r7c4
        line.replace_range(72..73, "9"); // r8c0
        Board::from_str_line(&line).unwrap()
    }

    #[test]
    fn wing_eliminates_from_common_peers() {
        let board = wing_board();
        assert_eq!(board.candidates_of(Cell::new(0)).len(), 2);
        assert_eq!(board.candidates_of(Cell::new(4)).len(), 2);
        assert_eq!(board.candidates_of(Cell::new(36)).len(), 2);

        assert_eq!(
            find_xy_wing(&board),
            Some(Deduction::XyWing {
                pivot: Cell::new(0),
                pincers: [Cell::new(4), Cell::new(36)],
                digit: Digit::new(3),
                eliminated: vec![Candidate::new(40, 3)],
            })
        );
    }

    #[test]
    fn pincers_must_reach_a_common_digit() {
        let mut board = wing_board();
        // remove 3 from the second pincer so no shared digit remains
        board.eliminate(Cell::new(36), Digit::new(3));
        assert_eq!(find_xy_wing(&board), None);
    }
}
