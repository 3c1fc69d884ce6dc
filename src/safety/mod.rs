/*!
 * Safety Module
 * Deadlock-avoidance safety evaluation
 */

pub mod config;
pub mod evaluator;
pub mod traits;
pub mod types;

// Re-export public API
pub use config::ScanOrder;
pub use evaluator::SafetyEvaluator;
pub use traits::SafetyCheck;
pub use types::SafetyReport;

#[cfg(test)]
pub use traits::MockSafetyCheck;
