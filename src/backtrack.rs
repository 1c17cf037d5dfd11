//! Fallback solver: minimum-remaining-values search over the raw grid.
//!
//! Used to obtain *a* solution when the technique engine stalls. It plays
//! no part in difficulty grading. Legality is recomputed from the row,
//! column and block contents directly, so the search stays correct even
//! when the candidate layer of a [`Board`] is already contradictory.

use log::debug;

use crate::bitset::{Iter as SetIter, Set};
use crate::board::{Cell, Digit, Grid};
use crate::strategy::Board;

struct Frame {
    cell: Cell,
    digits: SetIter<Digit>,
}

/// Searches for a solution of `grid` by bounded depth-first search.
///
/// The most constrained cell is tried first. The search keeps an explicit
/// frame stack of at most 81 entries instead of recursing, so its depth is
/// bounded by construction and exhaustion is reported through the return
/// value. Returns `None` when no assignment of the open cells satisfies
/// the row/column/block constraints.
pub fn solve(grid: &Grid) -> Option<Grid> {
    let mut grid = *grid;
    let mut stack: Vec<Frame> = Vec::with_capacity(81);
    let mut nodes = 0_u64;

    match most_constrained(&grid) {
        None => return Some(grid), // nothing open
        Some((cell, digits)) => stack.push(Frame {
            cell,
            digits: digits.into_iter(),
        }),
    }

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        match frame.digits.next() {
            None => {
                grid.set(cell, None);
                stack.pop();
            }
            Some(digit) => {
                nodes += 1;
                grid.set(cell, Some(digit));
                match most_constrained(&grid) {
                    None => {
                        debug!("backtracking solved the grid after {} assignments", nodes);
                        return Some(grid);
                    }
                    Some((next, digits)) => stack.push(Frame {
                        cell: next,
                        digits: digits.into_iter(),
                    }),
                }
            }
        }
    }

    debug!("backtracking exhausted the search after {} assignments", nodes);
    None
}

// The open cell with the fewest legal digits, scanning in ascending cell
// order. Cuts the scan short at a cell with zero or one legal digit since
// no later cell can beat it in a way that matters.
fn most_constrained(grid: &Grid) -> Option<(Cell, Set<Digit>)> {
    let mut best: Option<(Cell, Set<Digit>)> = None;
    for cell in Cell::all() {
        if grid.value(cell).is_some() {
            continue;
        }
        let digits = legal_digits(grid, cell);
        let beats_best = match &best {
            Some((_, best_digits)) => digits.len() < best_digits.len(),
            None => true,
        };
        if beats_best {
            let decided = digits.len() <= 1;
            best = Some((cell, digits));
            if decided {
                break;
            }
        }
    }
    best
}

fn legal_digits(grid: &Grid, cell: Cell) -> Set<Digit> {
    let used = cell
        .peers()
        .filter_map(|peer| grid.value(peer))
        .fold(Set::NONE, |set, digit| set | digit);
    Set::ALL.without(used)
}

impl Board {
    /// Solves the current grid by backtracking search, ignoring the
    /// candidate layer. `None` means the grid is unsatisfiable.
    pub fn solve_backtracking(&self) -> Option<Grid> {
        solve(self.grid())
    }
}
