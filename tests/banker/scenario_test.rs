/*!
 * Scenario Tests
 * The canonical five-process, three-resource walkthrough
 */

use pretty_assertions::assert_eq;
use resource_banker::{
    Bank, BankConfig, RequestError, RequestOutcome, RequestProcessor, ResourceState,
    SafetyCheck, SafetyEvaluator, Scenario, ScanOrder, StateError,
};
use std::io::Write as _;
use tempfile::NamedTempFile;

fn textbook_state() -> ResourceState {
    Scenario::textbook().build_state().unwrap()
}

#[test]
fn test_initial_state_is_safe() {
    let state = textbook_state();

    let textbook = SafetyEvaluator::new(ScanOrder::textbook()).check_safe(&state);
    assert!(textbook.is_safe());
    assert_eq!(textbook.sequence(), Some(&[1, 3, 4, 0, 2][..]));

    let ascending = SafetyEvaluator::default().check_safe(&state);
    assert!(ascending.is_safe());
    assert_eq!(ascending.sequence(), Some(&[1, 3, 0, 2, 4][..]));
}

#[test]
fn test_safety_is_deterministic() {
    let state = textbook_state();
    let evaluator = SafetyEvaluator::new(ScanOrder::Descending);

    let first = evaluator.check_safe(&state);
    let second = evaluator.check_safe(&state);
    assert_eq!(first, second);
}

#[test]
fn test_safety_verdict_independent_of_order() {
    let state = textbook_state();
    for order in [
        ScanOrder::Ascending,
        ScanOrder::Descending,
        ScanOrder::textbook(),
        ScanOrder::Explicit(vec![2, 0]),
    ] {
        assert!(SafetyEvaluator::new(order).check_safe(&state).is_safe());
    }
}

#[test]
fn test_grant_then_insufficient() {
    let processor = RequestProcessor::new(SafetyEvaluator::new(ScanOrder::textbook()));
    let mut state = textbook_state();

    let outcome = processor.request(&mut state, 1, &[1, 0, 2]).unwrap();
    assert_eq!(outcome, RequestOutcome::Granted(vec![1, 3, 4, 0, 2]));
    assert_eq!(state.available(), &[2, 3, 0]);
    assert_eq!(state.allocation_of(1), &[3, 0, 2]);
    assert_eq!(state.need_of(4), &[4, 3, 1]);

    let after_grant = state.clone();
    let err = processor.request(&mut state, 4, &[3, 3, 1]).unwrap_err();
    assert!(matches!(
        err,
        RequestError::InsufficientResources { process: 4, .. }
    ));
    assert_eq!(state, after_grant);
}

#[test]
fn test_bank_replays_scenario_script() {
    let scenario = Scenario::textbook();
    let mut bank = Bank::from_scenario(&scenario, &BankConfig::default()).unwrap();

    let results: Vec<_> = scenario
        .requests
        .iter()
        .map(|scripted| bank.request(scripted.process, &scripted.request))
        .collect();

    assert!(results[0].as_ref().unwrap().is_granted());
    assert!(results[1].is_err());
    assert_eq!(bank.stats().granted, 1);
    assert_eq!(bank.stats().insufficient, 1);
}

#[test]
fn test_malformed_construction() {
    let err = ResourceState::new(vec![3, 3], vec![vec![1, 1], vec![2, 2]], vec![vec![1, 1]])
        .unwrap_err();
    assert!(matches!(err, StateError::RowCountMismatch { .. }));

    let err = ResourceState::new(vec![3, 3], vec![vec![1, 1]], vec![vec![1, 2]]).unwrap_err();
    assert_eq!(
        err,
        StateError::AllocationExceedsMax {
            process: 0,
            resource: 1,
            allocated: 2,
            max: 1,
        }
    );
}

#[test]
fn test_scenario_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(&mut file, &Scenario::textbook()).unwrap();
    file.flush().unwrap();

    let loaded = Scenario::load(file.path()).unwrap();
    assert_eq!(loaded, Scenario::textbook());
}
