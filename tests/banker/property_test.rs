/*!
 * Property Tests
 * Invariants, conservation and rollback exactness over random request streams
 */

use proptest::prelude::*;
use proptest::sample::Index;
use resource_banker::{
    ProcessId, RequestOutcome, RequestProcessor, ResourceState, SafetyCheck, SafetyEvaluator,
    ScanOrder, Units,
};

const MAX_RESOURCES: usize = 4;

/// Random well-formed state: allocation is a fraction of each claim
fn arb_state() -> impl Strategy<Value = ResourceState> {
    (1usize..7, 1usize..=MAX_RESOURCES)
        .prop_flat_map(|(processes, resources)| {
            (
                prop::collection::vec(0u32..8, resources),
                prop::collection::vec(
                    prop::collection::vec((0u32..8, 0u32..=100), resources),
                    processes,
                ),
            )
        })
        .prop_map(|(available, rows)| {
            let max: Vec<Vec<Units>> = rows
                .iter()
                .map(|row| row.iter().map(|&(claim, _)| claim).collect())
                .collect();
            let allocation: Vec<Vec<Units>> = rows
                .iter()
                .map(|row| row.iter().map(|&(claim, pct)| claim * pct / 100).collect())
                .collect();
            ResourceState::new(available, max, allocation).unwrap()
        })
}

/// (process pick, vector, is_release); vectors are truncated to the state's width
fn arb_ops() -> impl Strategy<Value = Vec<(Index, Vec<Units>, bool)>> {
    prop::collection::vec(
        (
            any::<Index>(),
            prop::collection::vec(0u32..5, MAX_RESOURCES),
            prop::bool::weighted(0.25),
        ),
        0..24,
    )
}

/// Replay a completion order and check every step is affordable
fn is_valid_witness(state: &ResourceState, sequence: &[ProcessId]) -> bool {
    let mut work = state.available().to_vec();
    let mut seen = vec![false; state.process_count()];
    for &process in sequence {
        if seen[process] {
            return false;
        }
        seen[process] = true;
        if state
            .need_of(process)
            .iter()
            .zip(&work)
            .any(|(need, have)| need > have)
        {
            return false;
        }
        for (slot, held) in work.iter_mut().zip(state.allocation_of(process)) {
            *slot += held;
        }
    }
    seen.iter().all(|&finished| finished)
}

proptest! {
    #[test]
    fn prop_invariants_and_conservation(initial in arb_state(), ops in arb_ops()) {
        let processor = RequestProcessor::<SafetyEvaluator>::default();
        let mut state = initial;
        let totals = state.total_supply();

        for (pick, raw, release) in ops {
            let process = pick.index(state.process_count());
            let vector = &raw[..state.resource_count()];
            let before = state.clone();

            if release {
                if processor.release(&mut state, process, vector).is_err() {
                    prop_assert_eq!(&state, &before);
                }
            } else {
                match processor.request(&mut state, process, vector) {
                    Ok(RequestOutcome::Granted(sequence)) => {
                        prop_assert!(is_valid_witness(&state, &sequence));
                    }
                    Ok(RequestOutcome::Unsafe) | Err(_) => {
                        prop_assert_eq!(&state, &before);
                    }
                }
            }

            prop_assert!(state.verify_invariants().is_ok());
            prop_assert_eq!(state.total_supply(), totals.clone());
        }
    }

    #[test]
    fn prop_safety_verdict_independent_of_order(state in arb_state()) {
        let ascending = SafetyEvaluator::new(ScanOrder::Ascending).check_safe(&state);
        let descending = SafetyEvaluator::new(ScanOrder::Descending).check_safe(&state);
        prop_assert_eq!(ascending.is_safe(), descending.is_safe());

        if let Some(sequence) = ascending.sequence() {
            prop_assert!(is_valid_witness(&state, sequence));
        }
        if let Some(sequence) = descending.sequence() {
            prop_assert!(is_valid_witness(&state, sequence));
        }
    }

    #[test]
    fn prop_safety_is_deterministic(state in arb_state()) {
        let evaluator = SafetyEvaluator::new(ScanOrder::Descending);
        prop_assert_eq!(evaluator.check_safe(&state), evaluator.check_safe(&state));
    }

    #[test]
    fn prop_grant_keeps_safe_state_safe(initial in arb_state(), ops in arb_ops()) {
        let evaluator = SafetyEvaluator::default();
        if !evaluator.check_safe(&initial).is_safe() {
            return Ok(());
        }

        let processor = RequestProcessor::new(evaluator.clone());
        let mut state = initial;
        for (pick, raw, _) in ops {
            let process = pick.index(state.process_count());
            let width = state.resource_count();
            let _ = processor.request(&mut state, process, &raw[..width]);
            prop_assert!(evaluator.check_safe(&state).is_safe());
        }
    }
}
