/*!
 * Shared Bank Tests
 * Serialized access from many threads keeps the accounting exact
 */

use pretty_assertions::assert_eq;
use resource_banker::{Bank, BankConfig, RequestOutcome, Scenario, SharedBank};
use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

fn shared_textbook() -> SharedBank {
    let bank = Bank::from_scenario(&Scenario::textbook(), &BankConfig::default()).unwrap();
    SharedBank::new(bank)
}

#[test]
fn test_concurrent_requests_conserve_supply() {
    let bank = shared_textbook();
    let totals = bank.snapshot().total_supply();
    let barrier = Arc::new(Barrier::new(5));

    let handles: Vec<_> = (0..5)
        .map(|process| {
            let bank = bank.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..20 {
                    if let Ok(RequestOutcome::Granted(_)) = bank.request(process, &[1, 0, 0]) {
                        bank.release(process, &[1, 0, 0]).unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let state = bank.snapshot();
    assert_eq!(state.total_supply(), totals);
    assert!(state.verify_invariants().is_ok());
    assert_eq!(state, Scenario::textbook().build_state().unwrap());

    let stats = bank.stats();
    assert_eq!(stats.granted, stats.releases);
    assert_eq!(stats.granted + stats.rejected() + stats.malformed, 100);
}

#[test]
fn test_with_bank_runs_under_one_lock() {
    let bank = shared_textbook();

    let (granted, released) = bank.with_bank(|bank| {
        let granted = bank.request(1, &[1, 0, 2]).unwrap();
        let released = bank.release_all(1).unwrap();
        (granted, released)
    });

    assert!(granted.is_granted());
    assert_eq!(released, vec![3, 0, 2]);
    assert_eq!(bank.snapshot().available(), &[5, 3, 2]);
    assert!(bank.check_safe().is_safe());
}

#[test]
fn test_clones_share_state() {
    let bank = shared_textbook();
    let other = bank.clone();

    assert!(bank.request(1, &[1, 0, 2]).unwrap().is_granted());
    assert_eq!(other.snapshot().allocation_of(1), &[3, 0, 2]);
    assert_eq!(other.stats().granted, 1);
}
