/*!
 * Bank Module
 * Integration layer: state ownership, configuration, statistics and locking
 */

#[allow(clippy::module_inception)]
pub mod bank;
pub mod config;
pub mod shared;
pub mod stats;

// Re-export public API
pub use bank::Bank;
pub use config::{BankConfig, SCAN_ORDER_ENV, TRACE_JSON_ENV};
pub use shared::SharedBank;
pub use stats::BankStats;
