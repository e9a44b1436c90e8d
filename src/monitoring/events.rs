/*!
 * Simulation Events
 * Status-line events emitted by the execution engine
 */

use crate::core::types::{Millis, Pid};
use crate::metadata::{IoDirection, MemoryAction};
use std::fmt;

/// One status-line event; `Display` renders the message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    SimulatorStart,
    ProcessReady {
        pid: Pid,
    },
    ProcessSelected {
        pid: Pid,
        time_remaining: Millis,
    },
    ProcessRunning {
        pid: Pid,
    },
    IoStart {
        pid: Pid,
        device: String,
        direction: IoDirection,
    },
    IoEnd {
        pid: Pid,
        device: String,
        direction: IoDirection,
    },
    CpuStart {
        pid: Pid,
    },
    CpuEnd {
        pid: Pid,
    },
    MemoryAttempt {
        pid: Pid,
        action: MemoryAction,
    },
    MemorySuccess {
        pid: Pid,
        action: MemoryAction,
    },
    MemoryFailure {
        pid: Pid,
        action: MemoryAction,
    },
    SegmentationFault {
        pid: Pid,
    },
    ProcessEnded {
        pid: Pid,
    },
    ProcessExit {
        pid: Pid,
    },
    SystemStop,
    SimulationEnd,
}

impl SimEvent {
    /// Process the event concerns, if any
    pub fn pid(&self) -> Option<Pid> {
        match self {
            Self::SimulatorStart | Self::SystemStop | Self::SimulationEnd => None,
            Self::ProcessReady { pid }
            | Self::ProcessSelected { pid, .. }
            | Self::ProcessRunning { pid }
            | Self::IoStart { pid, .. }
            | Self::IoEnd { pid, .. }
            | Self::CpuStart { pid }
            | Self::CpuEnd { pid }
            | Self::MemoryAttempt { pid, .. }
            | Self::MemorySuccess { pid, .. }
            | Self::MemoryFailure { pid, .. }
            | Self::SegmentationFault { pid }
            | Self::ProcessEnded { pid }
            | Self::ProcessExit { pid } => Some(*pid),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimulatorStart => write!(f, "OS: Simulator start"),
            Self::ProcessReady { pid } => {
                write!(f, "OS: Process {} set to READY state from NEW state", pid)
            }
            Self::ProcessSelected {
                pid,
                time_remaining,
            } => write!(
                f,
                "OS: Process {} selected with {} ms remaining",
                pid, time_remaining
            ),
            Self::ProcessRunning { pid } => {
                write!(f, "OS: Process {} set from READY to RUNNING", pid)
            }
            Self::IoStart {
                pid,
                device,
                direction,
            } => write!(
                f,
                "Process: {}, {} {} operation start",
                pid,
                device,
                direction.describe()
            ),
            Self::IoEnd {
                pid,
                device,
                direction,
            } => write!(
                f,
                "Process: {}, {} {} operation end",
                pid,
                device,
                direction.describe()
            ),
            Self::CpuStart { pid } => write!(f, "Process: {}, cpu process operation start", pid),
            Self::CpuEnd { pid } => write!(f, "Process: {}, cpu process operation end", pid),
            Self::MemoryAttempt { pid, action } => write!(
                f,
                "Process: {}, attempting mem {} request",
                pid,
                action.as_str()
            ),
            Self::MemorySuccess { pid, action } => write!(
                f,
                "Process: {}, successful mem {} request",
                pid,
                action.as_str()
            ),
            Self::MemoryFailure { pid, action } => write!(
                f,
                "Process: {}, failed mem {} request",
                pid,
                action.as_str()
            ),
            Self::SegmentationFault { pid } => {
                write!(f, "Process: {}, experiences segmentation fault", pid)
            }
            Self::ProcessEnded { pid } => write!(f, "OS: Process {} ended", pid),
            Self::ProcessExit { pid } => write!(f, "OS: Process {} set to EXIT", pid),
            Self::SystemStop => write!(f, "OS: System stop"),
            Self::SimulationEnd => write!(f, "OS: Simulation end"),
        }
    }
}
