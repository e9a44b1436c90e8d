/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated process ID type, assigned in metadata order starting at 0
pub type Pid = u32;

/// Cycle count of a CPU or IO burst
pub type Cycles = u64;

/// Simulated memory address
pub type Address = u64;

/// Size type for simulated memory requests
pub type Size = u64;

/// Simulated duration in milliseconds
pub type Millis = u64;
