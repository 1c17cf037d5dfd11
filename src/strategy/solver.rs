use log::{debug, trace};

use crate::board::Grid;
use crate::strategy::strategies::*;
use crate::strategy::{Board, Deduction, Difficulty, Technique, Trace};

// Fixed priority order. Within one tier easier patterns come first; the
// first finder that produces a change wins, so two runs over the same
// board always agree on the step taken.
#[rustfmt::skip]
const PRIORITY: &[fn(&Board) -> Option<Deduction>] = &[
    find_full_house,          // tier 0
    find_hidden_single_block, // tier 0
    find_hidden_single_line,  // tier 1
    find_naked_single,        // tier 1
    find_pointing,            // tier 2
    find_claiming,            // tier 2
    find_naked_subset,        // tier 2
    find_hidden_subset,       // tier 2
    find_xwing,               // tier 3
    find_xy_wing,             // tier 3
];

/// Searches for the next deduction in priority order, without applying it.
///
/// Returns `None` when no implemented technique produces an assignment or
/// elimination on this board. The board is not touched; pattern matching
/// and application are separate steps.
pub fn next_step(board: &Board) -> Option<Deduction> {
    PRIORITY.iter().find_map(|find| find(board))
}

/// The outcome of grading one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grading {
    /// Highest tier among the applied steps
    pub difficulty: Difficulty,
    /// Grid state at the end of the run (fully solved unless the run
    /// ended in a terminal step)
    pub grid: Grid,
    /// Every applied step, in order
    pub trace: Trace,
}

impl Grading {
    /// The technique responsible for the grading: the most recent step at
    /// the maximum tier. `None` only for an empty trace.
    pub fn cause(&self) -> Option<Technique> {
        self.trace
            .iter()
            .rev()
            .find(|deduction| deduction.tier() == self.difficulty)
            .map(Deduction::technique)
    }

    /// Whether the run ended with a solved board.
    pub fn is_solved(&self) -> bool {
        self.grid.is_filled()
    }
}

/// Replays the technique engine to completion over one board and records
/// every step.
///
/// Grading consumes the board: the run mutates it in place and the final
/// grid is handed back inside the [`Grading`].
#[derive(Clone, Debug)]
pub struct Grader {
    board: Board,
    trace: Trace,
}

impl Grader {
    /// Starts a grading session over `board`.
    pub fn new(board: Board) -> Grader {
        Grader {
            board,
            trace: Trace::new(),
        }
    }

    /// Runs the engine until the board is solved, contradictory or no
    /// technique fires, and derives the overall difficulty.
    ///
    /// A contradiction or exhausted technique list ends the trace with a
    /// terminal Expert-tier step; the trace up to that point stays intact.
    pub fn grade(mut self) -> Grading {
        while !self.board.is_solved() {
            let step = next_step(&self.board);
            if let Some(deduction) = &step {
                trace!(
                    "step {}: {} ({})",
                    self.trace.len(),
                    deduction.technique(),
                    deduction.tier(),
                );
                self.board.apply(deduction);
                self.trace.push(deduction.clone());
            }
            if let Some(cell) = self.board.contradiction() {
                self.trace.push(Deduction::Contradiction { cell });
                break;
            }
            if step.is_none() {
                self.trace.push(Deduction::Stuck);
                break;
            }
        }

        let difficulty = self.trace.max_tier();
        debug!("graded {} after {} steps", difficulty, self.trace.len());
        Grading {
            difficulty,
            grid: *self.board.grid(),
            trace: self.trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Cell, Digit};

    // the valid cyclic grid with a single blank in row 0
    const ONE_BLANK: &str =
        "123406789456789123789123456231564897564897231897231564312645978645978312978312645";

    #[test]
    fn one_missing_digit_grades_as_beginner() {
        let board = Board::from_str_line(ONE_BLANK).unwrap();
        let grading = Grader::new(board).grade();
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
        assert_eq!(grading.cause(), Some(Technique::FullHouse));
    }

    #[test]
    fn solved_board_grades_without_steps() {
        let solved = ONE_BLANK.replace('0', "5");
        let board = Board::from_str_line(&solved).unwrap();
        let grading = Grader::new(board).grade();
        assert!(grading.is_solved());
        assert_eq!(grading.difficulty, Difficulty::Beginner);
        assert!(grading.trace.is_empty());
        assert_eq!(grading.cause(), None);
    }

    #[test]
    fn empty_board_stalls_into_the_residual_tier() {
        let board = Board::from_str_line(&".".repeat(81)).unwrap();
        let grading = Grader::new(board).grade();
        assert!(!grading.is_solved());
        assert_eq!(grading.difficulty, Difficulty::Expert);
        assert_eq!(grading.trace.len(), 1);
        assert_eq!(grading.trace.get(0), Some(&Deduction::Stuck));
        assert_eq!(grading.cause(), Some(Technique::Stuck));
    }

    #[test]
    fn conflicting_givens_end_in_a_contradiction_step() {
        // cell 0 sees 1..=4 in its row and 5..=9 in its column and is left
        // without a single candidate
        let mut line = ".".repeat(81);
        line.replace_range(1..5, "1234");
        for (idx, digit) in [(9, "5"), (18, "6"), (27, "7"), (36, "8"), (45, "9")] {
            line.replace_range(idx..idx + 1, digit);
        }
        let board = Board::from_str_line(&line).unwrap();
        assert!(board.has_contradiction());
        let grading = Grader::new(board).grade();
        assert_eq!(grading.difficulty, Difficulty::Expert);
        assert_eq!(
            grading.trace.iter().last(),
            Some(&Deduction::Contradiction { cell: Cell::new(0) })
        );
    }
}
