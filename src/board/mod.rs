//! Types for cells, digits and other things on a sudoku board
mod candidate;
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::positions::*;

pub use self::{
    candidate::Candidate,
    digit::Digit,
    grid::Grid,
    positions::{Block, Cell, Col, House, HouseType, Line, LineType, Row},
};
