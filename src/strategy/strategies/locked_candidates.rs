use super::prelude::*;

/// Pointing: within a block, all candidates for a digit lie on one line,
/// so the digit cannot appear on that line outside the block.
///
/// For each block and digit the row interaction is probed before the
/// column interaction; a match without any actual elimination is skipped.
pub(crate) fn find_pointing(board: &Board) -> Option<Deduction> {
    for block in Block::all() {
        let house = House::from(block);
        for digit in Digit::all() {
            let locations = board.house_candidate_cells(house, digit);
            let first = match locations.first() {
                Some(&cell) => cell,
                None => continue,
            };

            let row = first.row();
            if locations.iter().all(|cell| cell.row() == row) {
                if let Some(deduction) = pointing_on_line(board, block, digit, Line::from(row)) {
                    return Some(deduction);
                }
            }

            let col = first.col();
            if locations.iter().all(|cell| cell.col() == col) {
                if let Some(deduction) = pointing_on_line(board, block, digit, Line::from(col)) {
                    return Some(deduction);
                }
            }
        }
    }
    None
}

fn pointing_on_line(board: &Board, block: Block, digit: Digit, line: Line) -> Option<Deduction> {
    let eliminated: Vec<Candidate> = line
        .cells()
        .filter(|&cell| cell.block() != block)
        .filter(|&cell| board.candidates_of(cell).contains(digit))
        .map(|cell| Candidate { cell, digit })
        .collect();
    if eliminated.is_empty() {
        return None;
    }
    Some(Deduction::Pointing {
        digit,
        block,
        line,
        eliminated,
    })
}

/// Claiming: within a line, all candidates for a digit lie in one block,
/// so the digit cannot appear elsewhere in that block.
///
/// All rows are scanned before all columns.
pub(crate) fn find_claiming(board: &Board) -> Option<Deduction> {
    for line in Line::all() {
        let house = House::from(line);
        for digit in Digit::all() {
            let locations = board.house_candidate_cells(house, digit);
            let first = match locations.first() {
                Some(&cell) => cell,
                None => continue,
            };

            let block = first.block();
            if !locations.iter().all(|cell| cell.block() == block) {
                continue;
            }
            let eliminated: Vec<Candidate> = block
                .cells()
                .filter(|&cell| !line.contains(cell))
                .filter(|&cell| board.candidates_of(cell).contains(digit))
                .map(|cell| Candidate { cell, digit })
                .collect();
            if eliminated.is_empty() {
                continue;
            }
            return Some(Deduction::Claiming {
                digit,
                line,
                block,
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
    fn pointing_confines_a_digit_to_a_column() {
        // in block 0, digit 5 fits only into column 0: the other two
        // columns of the block see a 5 through their own columns
        let mut line = ".".repeat(81);
        line.replace_range(28..29, "5"); // r3c1
        line.replace_range(65..66, "5"); // r7c2
        let board = Board::from_str_line(&line).unwrap();

        let expected_eliminations: Vec<Candidate> = [36, 45, 54, 72]
            .iter()
            .map(|&cell| Candidate::new(cell, 5))
            .collect();
        assert_eq!(
            find_pointing(&board),
            Some(Deduction::Pointing {
                digit: Digit::new(5),
                block: Block::new(0),
                line: Line::from(Col::new(0)),
                eliminated: expected_eliminations,
            })
        );
    }

    #[test]
    fn claiming_confines_a_digit_to_a_block() {
        // row 0 can hold 7 only inside block 0: cells 3..=6 are clues and
        // columns 7 and 8 already contain a 7
        let mut line = ".".repeat(81);
        line.replace_range(3..7, "1234");
        line.replace_range(34..35, "7"); // r3c7
        line.replace_range(62..63, "7"); // r6c8
        let board = Board::from_str_line(&line).unwrap();

        let expected_eliminations: Vec<Candidate> = [9, 10, 11, 18, 19, 20]
            .iter()
            .map(|&cell| Candidate::new(cell, 7))
            .collect();
        assert_eq!(
            find_claiming(&board),
            Some(Deduction::Claiming {
                digit: Digit::new(7),
                line: Line::from(Row::new(0)),
                block: Block::new(0),
                eliminated: expected_eliminations,
            })
        );
    }
}
