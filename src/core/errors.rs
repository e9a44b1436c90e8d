/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use crate::core::types::Pid;
use crate::process::types::ProcessState;
use miette::Diagnostic;
use thiserror::Error;

// Re-export subsystem errors
pub use crate::config::ConfigError;
pub use crate::metadata::MetadataError;

/// Process table errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ProcessError {
    #[error("Metadata does not begin with a system start marker")]
    #[diagnostic(
        code(process::missing_system_start),
        help("The first operation of the metadata must be `sys start`.")
    )]
    MissingSystemStart,

    #[error("Operation {index} is outside any `app start` .. `app end` program")]
    #[diagnostic(
        code(process::missing_app_start),
        help("Each program must open with `app start`.")
    )]
    MissingAppStart { index: usize },

    #[error("Program of process {pid} starting at operation {start_index} has no `app end`")]
    #[diagnostic(
        code(process::unterminated_program),
        help("Every `app start` must be followed by a matching `app end` before `sys end`.")
    )]
    UnterminatedProgram { pid: Pid, start_index: usize },

    #[error("Process {pid}: invalid state transition {from} -> {to}")]
    #[diagnostic(
        code(process::invalid_state_transition),
        help("Lifecycle only allows NEW -> READY -> RUNNING -> READY | EXIT.")
    )]
    InvalidStateTransition {
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Process {0} advanced past the end of its program")]
    #[diagnostic(
        code(process::program_overrun),
        help("A process must reach EXIT at its `app end` operation.")
    )]
    ProgramOverrun(Pid),
}

/// Scheduler errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SchedulerError {
    #[error("No runnable process after process {0}")]
    #[diagnostic(
        code(scheduler::no_runnable_process),
        help("Every remaining process already reached EXIT.")
    )]
    NoRunnableProcess(Pid),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use FCFS-N or SJF-N.")
    )]
    InvalidPolicy(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Metadata error: {0}")]
    #[diagnostic(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Log file or report output failed. Check the path and permissions.")
    )]
    Io(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sim::serialization_error))]
    Serialization(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization(err.to_string())
    }
}

/// Result type for simulator operations
pub type SimResult<T> = std::result::Result<T, SimError>;
