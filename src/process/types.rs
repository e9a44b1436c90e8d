/*!
 * Process Types
 * Lifecycle states and exit reasons
 */

use crate::core::errors::ProcessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Created from metadata, not yet admitted
    New,
    /// Waiting to be selected
    Ready,
    /// Selected and executing its current operation
    Running,
    /// Terminal
    Exit,
}

impl ProcessState {
    /// Whether the lifecycle allows moving from `self` to `to`
    pub const fn can_transition_to(&self, to: ProcessState) -> bool {
        matches!(
            (self, to),
            (Self::New, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Exit)
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Exit => "EXIT",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a process reached EXIT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// Reached its `app end` operation
    Completed,
    /// A memory request failed
    SegmentationFault,
}
