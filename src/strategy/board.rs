use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit, Grid, House};
use crate::errors::LineParseError;
use crate::helper::CellArray;
use crate::strategy::Deduction;

/// A puzzle under analysis: the grid values plus a candidate set per cell,
/// kept consistent with the peer relation.
///
/// A board is owned by one grading or hinting session. All candidate
/// maintenance is eager: placing a value removes it from the candidate sets
/// of all 20 peers immediately. An unsolved cell whose candidate set runs
/// empty is a contradiction; it is *reported* through
/// [`contradiction`](Board::contradiction), never raised, so a grading run
/// can terminate with an inspectable trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    candidates: CellArray<Set<Digit>>,
    n_solved: u8,
}

impl Board {
    /// Builds a board from a grid and propagates every clue to its peers.
    pub fn new(grid: Grid) -> Board {
        let mut board = Board {
            grid: Grid([0; 81]),
            candidates: CellArray([Set::ALL; 81]),
            n_solved: 0,
        };
        for cell in Cell::all() {
            if let Some(digit) = grid.value(cell) {
                board.assign(cell, digit);
            }
        }
        board
    }

    /// Parses a puzzle line and builds the board from it.
    ///
    /// No board is produced if the string is malformed.
    pub fn from_str_line(s: &str) -> Result<Board, LineParseError> {
        Grid::from_str_line(s).map(Board::new)
    }

    /// The current grid values.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A read-only snapshot of all candidate sets. Solved cells carry the
    /// empty set.
    pub fn candidates(&self) -> CellArray<Set<Digit>> {
        self.candidates
    }

    /// The candidate set of a single cell.
    pub fn candidates_of(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Places `digit` in `cell`: clears the cell's candidates and removes
    /// the digit from every peer's candidate set.
    ///
    /// This may empty a peer's candidate set. That is not an error here;
    /// callers check [`contradiction`](Board::contradiction) afterwards.
    pub fn assign(&mut self, cell: Cell, digit: Digit) {
        if self.grid.value(cell).is_none() {
            self.n_solved += 1;
        }
        self.grid.set(cell, Some(digit));
        self.candidates[cell] = Set::NONE;
        for peer in cell.peers() {
            self.candidates[peer].remove(digit.as_set());
        }
    }

    /// Removes `digit` from the candidates of `cell`, if present.
    /// Returns whether a change occurred.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        let present = self.candidates[cell].contains(digit);
        if present {
            self.candidates[cell].remove(digit.as_set());
        }
        present
    }

    /// The first unsolved cell with an empty candidate set, in ascending
    /// cell order, if any.
    pub fn contradiction(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.grid.value(cell).is_none() && self.candidates[cell].is_empty())
    }

    /// Whether any unsolved cell has run out of candidates.
    pub fn has_contradiction(&self) -> bool {
        self.contradiction().is_some()
    }

    /// Whether every cell has a value.
    pub fn is_solved(&self) -> bool {
        self.n_solved == 81
    }

    /// Commits a deduction: performs its assignment and/or eliminations.
    ///
    /// This is how an interactive caller turns a hint into board progress.
    pub fn apply(&mut self, deduction: &Deduction) {
        if let Some(Candidate { cell, digit }) = deduction.assignment() {
            self.assign(cell, digit);
        }
        for &Candidate { cell, digit } in deduction.eliminations() {
            self.eliminate(cell, digit);
        }
    }

    /// The digits already placed in `house`.
    pub(crate) fn house_values(&self, house: House) -> Set<Digit> {
        house
            .cells()
            .filter_map(|cell| self.grid.value(cell))
            .fold(Set::NONE, |set, digit| set | digit)
    }

    /// The unsolved cells of `house` holding `digit` as a candidate,
    /// in ascending cell order.
    pub(crate) fn house_candidate_cells(&self, house: House, digit: Digit) -> Vec<Cell> {
        house
            .cells()
            .filter(|&cell| self.candidates[cell].contains(digit))
            .collect()
    }
}
