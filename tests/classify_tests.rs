//! Unit tests for the failing-step locator and the step classifier.
//!
//! The locator and classifier are generic over any comparable element, so
//! these tests use plain string lists; structural comparison of full steps is
//! covered by the extraction and rendering tests.

use sequencer_report::{classify, failing_step, OutcomeStatus};

const REFERENCE: [&str; 4] = ["Step 1", "Step 2", "Step 3", " Step 4"];

#[test]
fn identical_lists_locate_the_final_step() {
    assert_eq!(failing_step(&REFERENCE, &REFERENCE), Some(3));
}

#[test]
fn clean_prefix_locates_the_last_observed_step() {
    let actual = &REFERENCE[..2];
    assert_eq!(failing_step(&REFERENCE, actual), Some(1));
}

#[test]
fn divergence_locates_the_first_mismatch() {
    let actual = ["Step 1", "Step other", "Step 3"];
    assert_eq!(failing_step(&REFERENCE, &actual), Some(1));

    let diverged_late = ["Step 1", "Step 2", "Step wrong"];
    assert_eq!(failing_step(&REFERENCE, &diverged_late), Some(2));
}

#[test]
fn nothing_executed_locates_no_step() {
    let empty: [&str; 0] = [];
    assert_eq!(failing_step(&REFERENCE, &empty), None);
    assert_eq!(failing_step(&empty, &REFERENCE), None);
    assert_eq!(failing_step(&empty, &empty), None);
}

#[test]
fn extra_observed_steps_are_ignored() {
    let overlong = ["Step 1", "Step 2", "Step 3", " Step 4", "Step 5"];
    assert_eq!(failing_step(&REFERENCE, &overlong), Some(3));
}

#[test]
fn full_pass_marks_every_step_done() {
    let partition = classify(&REFERENCE, &REFERENCE, OutcomeStatus::Pass);
    assert_eq!(partition.done, REFERENCE);
    assert!(partition.fail.is_empty());
    assert!(partition.todo.is_empty());
}

#[test]
fn full_run_with_failure_pins_the_final_step() {
    // Outcome overrides content equality: the run reached the last step, but
    // the test failed, so the last step is shown as the failure.
    let partition = classify(&REFERENCE, &REFERENCE, OutcomeStatus::Fail);
    assert_eq!(partition.done, &REFERENCE[..3]);
    assert_eq!(partition.fail, [" Step 4"]);
    assert!(partition.todo.is_empty());
}

#[test]
fn partial_run_with_failure_pins_the_boundary_step() {
    let actual = &REFERENCE[..2];
    let partition = classify(&REFERENCE, actual, OutcomeStatus::Fail);
    assert_eq!(partition.done, ["Step 1"]);
    assert_eq!(partition.fail, ["Step 2"]);
    assert_eq!(partition.todo, ["Step 3", " Step 4"]);
}

#[test]
fn partial_run_without_failure_completes_the_boundary_step() {
    let actual = &REFERENCE[..2];
    let partition = classify(&REFERENCE, actual, OutcomeStatus::Pass);
    assert_eq!(partition.done, ["Step 1", "Step 2"]);
    assert!(partition.fail.is_empty());
    assert_eq!(partition.todo, ["Step 3", " Step 4"]);
}

#[test]
fn skip_behaves_like_pass() {
    let actual = &REFERENCE[..3];
    let partition = classify(&REFERENCE, actual, OutcomeStatus::Skip);
    assert_eq!(partition.done.len(), 3);
    assert!(partition.fail.is_empty());
    assert_eq!(partition.todo, [" Step 4"]);
}

#[test]
fn failed_run_with_nothing_executed_pins_the_first_step() {
    let empty: [&str; 0] = [];
    let partition = classify(&REFERENCE, &empty, OutcomeStatus::Fail);
    assert!(partition.done.is_empty());
    assert_eq!(partition.fail, ["Step 1"]);
    assert_eq!(partition.todo, ["Step 2", "Step 3", " Step 4"]);
}

#[test]
fn passed_run_with_nothing_executed_leaves_everything_pending() {
    let empty: [&str; 0] = [];
    let partition = classify(&REFERENCE, &empty, OutcomeStatus::Pass);
    assert!(partition.done.is_empty());
    assert!(partition.fail.is_empty());
    assert_eq!(partition.todo, REFERENCE);
}

#[test]
fn empty_reference_yields_empty_partitions() {
    let empty: [&str; 0] = [];
    for status in [OutcomeStatus::Pass, OutcomeStatus::Fail, OutcomeStatus::Skip] {
        let partition = classify(&empty, &REFERENCE, status);
        assert!(partition.done.is_empty());
        assert!(partition.fail.is_empty());
        assert!(partition.todo.is_empty());
    }
}

#[test]
fn partition_lengths_always_cover_the_reference() {
    let actuals: [&[&str]; 5] = [
        &[],
        &REFERENCE[..1],
        &REFERENCE[..2],
        &REFERENCE,
        &["Step 1", "Step wrong", "Step 3"],
    ];
    for actual in actuals {
        for status in [OutcomeStatus::Pass, OutcomeStatus::Fail, OutcomeStatus::Skip] {
            let partition = classify(&REFERENCE, actual, status);
            assert_eq!(
                partition.done.len() + partition.fail.len() + partition.todo.len(),
                REFERENCE.len(),
                "actual={:?} status={:?}",
                actual,
                status
            );
            assert!(partition.fail.len() <= 1);
        }
    }
}
