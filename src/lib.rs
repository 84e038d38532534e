pub use crate::errors::ReportError;
pub use crate::sequence::{
    classify, extract, failing_step, indent, longest_line_length, render, Classification, Outcome,
    OutcomeStatus, Step,
};

pub mod cli;
pub mod errors;
pub mod sequence;
