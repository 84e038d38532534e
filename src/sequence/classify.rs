//! Step Classifier - Comparing an Observed Run Against the Canonical List
//!
//! Given the canonical ("reference") step list and the steps actually
//! observed during a run, decide where execution stopped or diverged and
//! partition the reference list into done / failing / pending steps.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Step;

/// Terminal status of a sequencer test run.
///
/// Only `Fail` changes classification: any other status treats the boundary
/// step as having completed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Pass,
    Fail,
    Skip,
}

/// The overall result of a test run: its terminal status plus the test name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub name: String,
}

impl Outcome {
    pub fn new(status: OutcomeStatus, name: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
        }
    }
}

/// Order-preserving partition of a reference step list.
///
/// `fail` holds zero or one step; concatenating `done`, `fail`, and `todo`
/// reconstructs the reference list in its original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification<T = Step> {
    pub done: Vec<T>,
    pub fail: Vec<T>,
    pub todo: Vec<T>,
}

/// Index into `reference` of the step where execution stopped or diverged.
///
/// Steps are compared structurally, element by element, over the overlapping
/// range. The first mismatch index wins; if the actual list is a
/// content-identical prefix (the fully-equal case included), the index of the
/// last observed step is returned instead, clamped to the reference when the
/// actual list runs longer (extra observed steps are ignored). Returns `None`
/// when nothing executed at all, or when the reference itself is empty - no
/// step exists to point at.
pub fn failing_step<T: PartialEq>(reference: &[T], actual: &[T]) -> Option<usize> {
    if reference.is_empty() || actual.is_empty() {
        return None;
    }
    divergence(reference, actual).or_else(|| Some(actual.len().min(reference.len()) - 1))
}

/// First index in the overlapping range where the two lists disagree.
pub(crate) fn divergence<T: PartialEq>(reference: &[T], actual: &[T]) -> Option<usize> {
    (0..reference.len().min(actual.len())).find(|&i| reference[i] != actual[i])
}

/// Partition `reference` into done / failing / pending steps.
///
/// With a `Fail` status the boundary step is always shown as the failure,
/// even when its content is byte-identical to the reference - the outcome
/// overrides content equality, because a run that ended in failure failed at
/// the last step it reached. With any other status the boundary step counts
/// as completed. When nothing executed, a failed run pins the failure on the
/// first step; any other status leaves every step pending.
pub fn classify<T>(reference: &[T], actual: &[T], status: OutcomeStatus) -> Classification<T>
where
    T: Clone + PartialEq,
{
    let failed = status == OutcomeStatus::Fail;

    match failing_step(reference, actual) {
        Some(boundary) if failed => Classification {
            done: reference[..boundary].to_vec(),
            fail: vec![reference[boundary].clone()],
            todo: reference[boundary + 1..].to_vec(),
        },
        Some(boundary) => Classification {
            done: reference[..=boundary].to_vec(),
            fail: Vec::new(),
            todo: reference[boundary + 1..].to_vec(),
        },
        None if failed && !reference.is_empty() => Classification {
            done: Vec::new(),
            fail: vec![reference[0].clone()],
            todo: reference[1..].to_vec(),
        },
        None => Classification {
            done: Vec::new(),
            fail: Vec::new(),
            todo: reference.to_vec(),
        },
    }
}
