//! # Collectors Module
//!
//! The report pipeline.
//!
//! - **`CapacityCollector`**: sorts worker records and sums capacity per cluster and per tier
//! - **`Reporter`**: renders the collected report as the summary block and worker table, or as JSON
//! - **`Orchestrator`**: fetches records from a [`crate::WorkerSource`] and drives both

pub mod collector;
pub mod orchestrator;
pub mod reporter;

// Re-export the main types for easy access
pub use collector::CapacityCollector;
pub use orchestrator::Orchestrator;
pub use reporter::Reporter;
