/*!
 * Scheduler Module
 * Non-preemptive CPU scheduling policies
 */

pub mod selection;
pub mod types;

// Re-export public API
pub use selection::Scheduler;
pub use types::{SchedulingPolicy, Selection};
