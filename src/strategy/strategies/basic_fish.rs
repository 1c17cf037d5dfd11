use super::prelude::*;

// The size-2 basic fish. Larger fish (swordfish, jellyfish) are outside
// the supported technique set; boards needing them grade as Expert.

/// Finds an X-Wing: a digit restricted to the same two cover lines in two
/// base lines, eliminating it from the covers outside the base.
///
/// For every digit all row-based wings are probed first, then, starting
/// again with digit 1, all column-based wings.
pub(crate) fn find_xwing(board: &Board) -> Option<Deduction> {
    for digit in Digit::all() {
        let base: Vec<(Row, Vec<Col>)> = Row::all()
            .filter_map(|row| {
                let cols: Vec<Col> = row
                    .cells()
                    .filter(|&cell| board.candidates_of(cell).contains(digit))
                    .map(Cell::col)
                    .collect();
                match cols.len() {
                    2 => Some((row, cols)),
                    _ => None,
                }
            })
            .collect();

        for (i, (row1, cols)) in base.iter().enumerate() {
            for (row2, cols2) in &base[i + 1..] {
                if cols != cols2 {
                    continue;
                }
                let eliminated: Vec<Candidate> = Row::all()
                    .filter(|row| row != row1 && row != row2)
                    .flat_map(|row| cols.iter().map(move |&col| Cell::from_row_and_col(row, col)))
                    .filter(|&cell| board.candidates_of(cell).contains(digit))
                    .map(|cell| Candidate { cell, digit })
                    .collect();
                if eliminated.is_empty() {
                    continue;
                }
                return Some(Deduction::XWing {
                    digit,
                    base: [Line::from(*row1), Line::from(*row2)],
                    cover: [Line::from(cols[0]), Line::from(cols[1])],
                    eliminated,
                });
            }
        }
    }

    for digit in Digit::all() {
        let base: Vec<(Col, Vec<Row>)> = Col::all()
            .filter_map(|col| {
                let rows: Vec<Row> = col
                    .cells()
                    .filter(|&cell| board.candidates_of(cell).contains(digit))
                    .map(Cell::row)
                    .collect();
                match rows.len() {
                    2 => Some((col, rows)),
                    _ => None,
                }
            })
            .collect();

        for (i, (col1, rows)) in base.iter().enumerate() {
            for (col2, rows2) in &base[i + 1..] {
                if rows != rows2 {
                    continue;
                }
                let eliminated: Vec<Candidate> = Col::all()
                    .filter(|col| col != col1 && col != col2)
                    .flat_map(|col| rows.iter().map(move |&row| Cell::from_row_and_col(row, col)))
                    .filter(|&cell| board.candidates_of(cell).contains(digit))
                    .map(|cell| Candidate { cell, digit })
                    .collect();
                if eliminated.is_empty() {
                    continue;
                }
                return Some(Deduction::XWing {
                    digit,
                    base: [Line::from(*col1), Line::from(*col2)],
                    cover: [Line::from(rows[0]), Line::from(rows[1])],
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

    #[test]
    fn row_wing_clears_the_covering_columns() {
        // rows 1 and 4 are filled except for columns 4 and 7 and hold no 3,
        // so digit 3 forms an X-Wing on those columns
        let mut line = ".".repeat(81);
        line.replace_range(9..18, "124506708");
        line.replace_range(36..45, "215408906");
        let board = Board::from_str_line(&line).unwrap();

        let deduction = find_xwing(&board).unwrap();
        match &deduction {
            Deduction::XWing {
                digit,
                base,
                cover,
                eliminated,
            } => {
                assert_eq!(*digit, Digit::new(3));
                assert_eq!(*base, [Line::from(Row::new(1)), Line::from(Row::new(4))]);
                assert_eq!(*cover, [Line::from(Col::new(4)), Line::from(Col::new(7))]);
                // every row but the base rows loses 3 in both columns
                assert_eq!(eliminated.len(), 14);
                assert!(eliminated
                    .iter()
                    .all(|c| c.digit == Digit::new(3) && (c.col().get() == 4 || c.col().get() == 7)));
                assert!(eliminated
                    .iter()
                    .all(|c| c.row().get() != 1 && c.row().get() != 4));
            }
            other => panic!("unexpected deduction {:?}", other),
        }
    }

    #[test]
    fn no_wing_without_matching_columns() {
        let mut line = ".".repeat(81);
        line.replace_range(9..18, "124506708");
        // second base row pairs 3 with different columns
        line.replace_range(36..45, "215480906");
        let board = Board::from_str_line(&line).unwrap();
        assert_eq!(find_xwing(&board), None);
    }
}
