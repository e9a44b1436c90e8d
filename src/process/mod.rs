/*!
 * Process Module
 * Process control blocks, lifecycle and the process table
 */

pub mod entry;
pub mod table;
pub mod types;

// Re-export public API
pub use crate::core::errors::ProcessError;
pub use entry::ProcessEntry;
pub use table::{total_run_time, ProcessTable};
pub use types::{ExitReason, ProcessResult, ProcessState};
