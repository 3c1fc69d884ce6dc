/*!
 * Resource Banker Library
 * Deadlock-avoidance resource accounting (Banker's algorithm)
 */

pub mod bank;
pub mod core;
pub mod monitoring;
pub mod request;
pub mod safety;
pub mod scenario;
pub mod state;

// Re-exports
pub use bank::{Bank, BankConfig, BankStats, SharedBank};
pub use crate::core::errors::{BankerError, Result, SerializableError};
pub use crate::core::types::{ProcessId, ResourceId, ResourceVector, Units};
pub use monitoring::init_tracing;
pub use request::{RequestError, RequestOutcome, RequestProcessor, RequestResult};
pub use safety::{SafetyCheck, SafetyEvaluator, SafetyReport, ScanOrder};
pub use scenario::{Scenario, ScriptedRequest};
pub use state::{Matrix, ResourceState, StateError, StateResult};
