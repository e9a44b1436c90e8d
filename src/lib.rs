/*!
 * Simulator Kernel Library
 * Process scheduling, memory allocation and timed I/O simulation
 * exposed as a library
 */

pub mod config;
pub mod core;
pub mod engine;
pub mod memory;
pub mod metadata;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod timer;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::types::{Address, Cycles, Millis, Pid, Size};
pub use config::{load_config, LogTo, SimConfig};
pub use engine::{ProcessSummary, Simulation, SimulationReport};
pub use memory::{AllocationOutcome, MemoryAllocator, MemoryStats};
pub use metadata::{display_metadata, load_metadata, Operation};
pub use monitoring::{init_tracing, EventLog, SimEvent};
pub use process::{ProcessEntry, ProcessState, ProcessTable};
pub use scheduler::{Scheduler, SchedulingPolicy};
pub use timer::{Clock, VirtualClock, WallClock};
