//! The reasoning steps recorded while grading or hinting.
//!
//! Every successful technique application is logged as one [`Deduction`].
//! A deduction carries enough structure to replay the exact assignment or
//! eliminations it stands for: linear cell indices (row = idx/9,
//! col = idx%9), house indices and the digits involved. Rendering these
//! into human-readable text is a consumer concern.

use crate::board::{Block, Candidate, Cell, Digit, House, HouseType, Line};

use std::fmt;

/// The ordinal difficulty of a puzzle or a single deduction.
///
/// `Expert` doubles as the residual tier: it is reported both for boards
/// that reach a proven contradiction and for boards that merely exhaust the
/// implemented techniques. The trace distinguishes the two via
/// [`Deduction::Contradiction`] and [`Deduction::Stuck`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Tier 0: full houses and hidden singles in a block
    Beginner,
    /// Tier 1: hidden singles in a line, naked singles
    Novice,
    /// Tier 2: locked candidates and pair/triple subsets
    Intermediate,
    /// Tier 3: X-Wing and Y-Wing
    Advanced,
    /// Tier 4: beyond the implemented techniques, or contradictory
    Expert,
}

impl Difficulty {
    /// The tier as a stable integer, `0..=4`.
    pub fn as_index(self) -> u8 {
        self as u8
    }

    /// Constructs a difficulty from its integer tier.
    pub fn new_checked(tier: u8) -> Option<Self> {
        use self::Difficulty::*;
        Some(match tier {
            0 => Beginner,
            1 => Novice,
            2 => Intermediate,
            3 => Advanced,
            4 => Expert,
            _ => return None,
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Novice => "Novice",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        };
        f.write_str(name)
    }
}

/// Identifier of the technique behind a [`Deduction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Technique {
    FullHouse,
    HiddenSingle,
    NakedSingle,
    Pointing,
    Claiming,
    NakedPair,
    NakedTriple,
    HiddenPair,
    HiddenTriple,
    XWing,
    XyWing,
    /// Terminal marker: an unsolved cell ran out of candidates.
    Contradiction,
    /// Terminal marker: no implemented technique applies.
    Stuck,
}

impl Technique {
    /// All techniques in engine priority order, terminal markers last.
    /// For test purposes.
    pub const ALL: &'static [Technique] = &[
        Technique::FullHouse,
        Technique::HiddenSingle,
        Technique::NakedSingle,
        Technique::Pointing,
        Technique::Claiming,
        Technique::NakedPair,
        Technique::NakedTriple,
        Technique::HiddenPair,
        Technique::HiddenTriple,
        Technique::XWing,
        Technique::XyWing,
        Technique::Contradiction,
        Technique::Stuck,
    ];

    /// A stable ASCII name for this technique.
    pub fn name(self) -> &'static str {
        match self {
            Technique::FullHouse => "Full House",
            Technique::HiddenSingle => "Hidden Single",
            Technique::NakedSingle => "Naked Single",
            Technique::Pointing => "Pointing",
            Technique::Claiming => "Claiming",
            Technique::NakedPair => "Naked Pair",
            Technique::NakedTriple => "Naked Triple",
            Technique::HiddenPair => "Hidden Pair",
            Technique::HiddenTriple => "Hidden Triple",
            Technique::XWing => "X-Wing",
            Technique::XyWing => "Y-Wing",
            Technique::Contradiction => "Contradiction",
            Technique::Stuck => "Stuck",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single reasoning step: one assignment or one batch of eliminations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Deduction {
    /// A house with a single unsolved cell receives its missing digit.
    FullHouse { cell: Cell, digit: Digit },
    /// `digit` has a single candidate cell within `house`.
    HiddenSingle { cell: Cell, digit: Digit, house: House },
    /// `cell` has a single remaining candidate.
    NakedSingle { cell: Cell, digit: Digit },
    /// Within `block`, all candidates for `digit` lie on `line`;
    /// the digit is removed from the rest of the line.
    Pointing {
        digit: Digit,
        block: Block,
        line: Line,
        eliminated: Vec<Candidate>,
    },
    /// Within `line`, all candidates for `digit` lie in `block`;
    /// the digit is removed from the rest of the block.
    Claiming {
        digit: Digit,
        line: Line,
        block: Block,
        eliminated: Vec<Candidate>,
    },
    /// `cells` in `house` share the exact candidate set `digits`
    /// (2 or 3 of each); those digits leave the rest of the house.
    NakedSubset {
        house: House,
        cells: Vec<Cell>,
        digits: Vec<Digit>,
        eliminated: Vec<Candidate>,
    },
    /// `digits` occur only within `cells` of `house`; every other candidate
    /// leaves those cells.
    HiddenSubset {
        house: House,
        cells: Vec<Cell>,
        digits: Vec<Digit>,
        eliminated: Vec<Candidate>,
    },
    /// `digit` occupies exactly two cells in each of the `base` lines,
    /// aligned on the two `cover` lines; it leaves the rest of the covers.
    XWing {
        digit: Digit,
        base: [Line; 2],
        cover: [Line; 2],
        eliminated: Vec<Candidate>,
    },
    /// A bivalue `pivot` sees two bivalue `pincers` sharing `digit`;
    /// the digit leaves all common peers of the pincers.
    XyWing {
        pivot: Cell,
        pincers: [Cell; 2],
        digit: Digit,
        eliminated: Vec<Candidate>,
    },
    /// Terminal step: `cell` is unsolved with no candidates left.
    Contradiction { cell: Cell },
    /// Terminal step: the board is unsolved but no technique applies.
    Stuck,
}

impl Deduction {
    /// The difficulty tier of this step.
    ///
    /// A hidden single counts as `Beginner` in a block and `Novice` in a
    /// row or column.
    pub fn tier(&self) -> Difficulty {
        use self::Deduction::*;
        match self {
            FullHouse { .. } => Difficulty::Beginner,
            HiddenSingle { house, .. } => match house.categorize() {
                HouseType::Block(_) => Difficulty::Beginner,
                _ => Difficulty::Novice,
            },
            NakedSingle { .. } => Difficulty::Novice,
            Pointing { .. } | Claiming { .. } | NakedSubset { .. } | HiddenSubset { .. } => {
                Difficulty::Intermediate
            }
            XWing { .. } | XyWing { .. } => Difficulty::Advanced,
            Contradiction { .. } | Stuck => Difficulty::Expert,
        }
    }

    /// The technique identifier of this step. Subset steps resolve to pair
    /// or triple by the size of their digit group.
    pub fn technique(&self) -> Technique {
        use self::Deduction::*;
        match self {
            FullHouse { .. } => Technique::FullHouse,
            HiddenSingle { .. } => Technique::HiddenSingle,
            NakedSingle { .. } => Technique::NakedSingle,
            Pointing { .. } => Technique::Pointing,
            Claiming { .. } => Technique::Claiming,
            NakedSubset { digits, .. } => match digits.len() {
                2 => Technique::NakedPair,
                3 => Technique::NakedTriple,
                _ => unreachable!("subset sizes are limited to 2 and 3"),
            },
            HiddenSubset { digits, .. } => match digits.len() {
                2 => Technique::HiddenPair,
                3 => Technique::HiddenTriple,
                _ => unreachable!("subset sizes are limited to 2 and 3"),
            },
            XWing { .. } => Technique::XWing,
            XyWing { .. } => Technique::XyWing,
            Contradiction { .. } => Technique::Contradiction,
            Stuck => Technique::Stuck,
        }
    }

    /// The assignment this step performs, if it is a placement step.
    pub fn assignment(&self) -> Option<Candidate> {
        use self::Deduction::*;
        match *self {
            FullHouse { cell, digit }
            | HiddenSingle { cell, digit, .. }
            | NakedSingle { cell, digit } => Some(Candidate { cell, digit }),
            _ => None,
        }
    }

    /// The candidates this step eliminates. Empty for placement and
    /// terminal steps.
    pub fn eliminations(&self) -> &[Candidate] {
        use self::Deduction::*;
        match self {
            Pointing { eliminated, .. }
            | Claiming { eliminated, .. }
            | NakedSubset { eliminated, .. }
            | HiddenSubset { eliminated, .. }
            | XWing { eliminated, .. }
            | XyWing { eliminated, .. } => eliminated,
            _ => &[],
        }
    }

    /// Whether this is one of the terminal markers ending a grading run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Deduction::Contradiction { .. } | Deduction::Stuck)
    }
}

/// The sequence of deductions made while grading a board.
///
/// Append-only; one entry per successful technique application, plus at
/// most one terminal entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trace {
    deductions: Vec<Deduction>,
}

impl Trace {
    pub(crate) fn new() -> Trace {
        Trace { deductions: vec![] }
    }

    pub(crate) fn push(&mut self, deduction: Deduction) {
        self.deductions.push(deduction);
    }

    /// Returns the number of deductions.
    pub fn len(&self) -> usize {
        self.deductions.len()
    }

    /// Whether no deduction was recorded.
    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty()
    }

    /// Return the `index`th deduction, if it exists.
    pub fn get(&self, index: usize) -> Option<&Deduction> {
        self.deductions.get(index)
    }

    /// Return an iterator over the deductions.
    pub fn iter(&self) -> std::slice::Iter<'_, Deduction> {
        self.deductions.iter()
    }

    /// The highest tier among the recorded deductions.
    /// An empty trace grades as `Beginner`.
    pub fn max_tier(&self) -> Difficulty {
        self.deductions
            .iter()
            .map(Deduction::tier)
            .max()
            .unwrap_or(Difficulty::Beginner)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Deduction;
    type IntoIter = std::slice::Iter<'a, Deduction>;

    fn into_iter(self) -> Self::IntoIter {
        self.deductions.iter()
    }
}
