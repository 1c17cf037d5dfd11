use sudoku_grader::board::{Block, House, HouseType};
use sudoku_grader::errors::LineParseError;
use sudoku_grader::{
    backtrack, next_hint, Board, Cell, Deduction, Difficulty, Digit, Grader, Technique,
};

// regression fixture: the first deducible step of this puzzle is pinned
const FIXTURE: &str =
    "000000000002060100800503009060090070504602301003000900706819503410000098000000000";

// the valid cyclic grid, used to derive engineered boards
const SOLVED: &str =
    "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

fn board(line: &str) -> Board {
    Board::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err))
}

// every row, column and block of a filled grid holds each digit once
fn assert_valid_solution(grid: &sudoku_grader::Grid) {
    assert!(grid.is_filled());
    for house in House::all() {
        let mut seen = [false; 10];
        for cell in house.cells() {
            let digit = grid.value(cell).unwrap().get() as usize;
            assert!(!seen[digit], "digit {} twice in house {:?}", digit, house);
            seen[digit] = true;
        }
    }
}

#[test]
fn fixture_first_hint_is_pinned() {
    let hint = next_hint(&board(FIXTURE)).unwrap();
    assert_eq!(
        hint,
        Deduction::HiddenSingle {
            cell: Cell::new(0),
            digit: Digit::new(6),
            house: House::from(Block::new(0)),
        }
    );
    assert_eq!(hint.tier(), Difficulty::Beginner);
    assert_eq!(hint.technique(), Technique::HiddenSingle);
}

#[test]
fn hints_are_idempotent_and_nondestructive() {
    let board = board(FIXTURE);
    let snapshot = board.clone();
    assert_eq!(next_hint(&board), next_hint(&board));
    assert_eq!(board, snapshot);
    assert_eq!(board.candidates(), snapshot.candidates());
}

#[test]
fn grading_is_deterministic() {
    let first = Grader::new(board(FIXTURE)).grade();
    let second = Grader::new(board(FIXTURE)).grade();
    assert_eq!(first.difficulty, second.difficulty);
    assert_eq!(first.trace, second.trace);
    assert_eq!(first.grid, second.grid);
}

#[test]
fn grading_terminates_with_a_verdict() {
    let grading = Grader::new(board(FIXTURE)).grade();
    assert!(!grading.trace.is_empty());
    assert!(grading.cause().is_some());
    match grading.trace.iter().last().unwrap() {
        step if step.is_terminal() => assert_eq!(grading.difficulty, Difficulty::Expert),
        _ => {
            assert!(grading.is_solved());
            assert_valid_solution(&grading.grid);
        }
    }
}

#[test]
fn one_open_cell_grades_beginner_in_one_step() {
    let mut line = SOLVED.to_string();
    line.replace_range(4..5, "0");
    let grading = Grader::new(board(&line)).grade();
    assert!(grading.is_solved());
    assert_eq!(grading.difficulty, Difficulty::Beginner);
    assert_eq!(grading.trace.len(), 1);
    assert_eq!(
        grading.trace.get(0),
        Some(&Deduction::FullHouse {
            cell: Cell::new(4),
            digit: Digit::new(5),
        })
    );
}

#[test]
fn eliminations_never_remove_the_solution() {
    let solution = backtrack::solve(board(FIXTURE).grid()).expect("fixture is satisfiable");
    assert_valid_solution(&solution);

    let mut board = board(FIXTURE);
    while let Some(step) = next_hint(&board) {
        for candidate in step.eliminations() {
            assert_ne!(
                solution.value(candidate.cell),
                Some(candidate.digit),
                "technique {} removed a solution digit",
                step.technique(),
            );
        }
        board.apply(&step);
        if board.has_contradiction() {
            panic!("fixture run must not contradict itself");
        }
        if board.is_solved() {
            break;
        }
    }
}

#[test]
fn candidates_stay_consistent_with_peers() {
    let mut board = board(FIXTURE);
    let mut steps = 0;
    while let Some(step) = next_hint(&board) {
        board.apply(&step);
        steps += 1;
        for cell in Cell::all() {
            if board.grid().value(cell).is_some() {
                continue;
            }
            for peer in cell.peers() {
                if let Some(digit) = board.grid().value(peer) {
                    assert!(
                        !board.candidates_of(cell).contains(digit),
                        "cell {:?} still holds peer digit {:?} after step {}",
                        cell,
                        digit,
                        steps,
                    );
                }
            }
        }
        if board.is_solved() || steps > 200 {
            break;
        }
    }
    assert!(steps > 0);
}

#[test]
fn trace_tiers_match_their_techniques() {
    let grading = Grader::new(board(FIXTURE)).grade();
    for step in &grading.trace {
        match step.technique() {
            Technique::FullHouse => assert_eq!(step.tier(), Difficulty::Beginner),
            Technique::HiddenSingle => match step {
                Deduction::HiddenSingle { house, .. } => match house.categorize() {
                    HouseType::Block(_) => assert_eq!(step.tier(), Difficulty::Beginner),
                    _ => assert_eq!(step.tier(), Difficulty::Novice),
                },
                _ => unreachable!(),
            },
            Technique::NakedSingle => assert_eq!(step.tier(), Difficulty::Novice),
            Technique::Pointing
            | Technique::Claiming
            | Technique::NakedPair
            | Technique::NakedTriple
            | Technique::HiddenPair
            | Technique::HiddenTriple => assert_eq!(step.tier(), Difficulty::Intermediate),
            Technique::XWing | Technique::XyWing => assert_eq!(step.tier(), Difficulty::Advanced),
            Technique::Contradiction | Technique::Stuck => {
                assert_eq!(step.tier(), Difficulty::Expert)
            }
        }
        assert!(grading.difficulty >= step.tier());
    }
}

#[test]
fn backtracking_round_trips_a_unique_puzzle() {
    // blanking one full row keeps the solution unique: each missing digit
    // is forced by its column
    let puzzle = format!("{}{}", &SOLVED[..72], ".".repeat(9));
    let solution = backtrack::solve(&sudoku_grader::Grid::from_str_line(&puzzle).unwrap()).unwrap();
    assert_eq!(solution.to_str_line(), SOLVED);
}

#[test]
fn backtracking_reports_unsatisfiable() {
    let mut line = ".".repeat(81);
    line.replace_range(1..9, "12345678");
    line.replace_range(9..10, "9");
    let board = board(&line);
    assert_eq!(board.solve_backtracking(), None);
}

#[test]
fn malformed_lines_produce_no_board() {
    let too_short = "0".repeat(80);
    assert_eq!(
        Board::from_str_line(&too_short).unwrap_err(),
        LineParseError::WrongLength(80)
    );

    let mut bad_char = ".".repeat(81);
    bad_char.replace_range(40..41, "a");
    assert!(matches!(
        Board::from_str_line(&bad_char).unwrap_err(),
        LineParseError::InvalidEntry(entry) if entry.cell == 40 && entry.ch == 'a'
    ));
}

#[test]
fn candidate_snapshot_matches_clues() {
    let board = board(FIXTURE);
    let candidates = board.candidates();
    for cell in Cell::all() {
        match board.grid().value(cell) {
            Some(_) => assert!(candidates[cell].is_empty()),
            None => assert!(!candidates[cell].is_empty()),
        }
    }
    // the pinned hidden single is visible in the snapshot
    assert!(candidates[Cell::new(0)].contains(Digit::new(6)));
}

#[test]
fn difficulty_tiers_are_ordered_and_stable() {
    assert!(
        Difficulty::Beginner < Difficulty::Novice
            && Difficulty::Novice < Difficulty::Intermediate
            && Difficulty::Intermediate < Difficulty::Advanced
            && Difficulty::Advanced < Difficulty::Expert
    );
    assert_eq!(Difficulty::Expert.as_index(), 4);

    let mut names: Vec<&str> = Technique::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), 13);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 13, "technique names must be distinct");
}
