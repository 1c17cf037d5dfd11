pub(crate) use crate::bitset::Set;
#[rustfmt::skip]
pub(crate) use crate::board::{
    Block,
    Candidate,
    Cell,
    Col,
    Digit,
    House,
    Line,
    Row,
};
pub(crate) use crate::strategy::{Board, Deduction};
