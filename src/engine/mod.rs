/*!
 * Execution Engine
 * Simulation driver and run summary
 */

pub mod simulation;
pub mod types;

// Re-export public API
pub use simulation::Simulation;
pub use types::{ProcessSummary, SimulationReport};
