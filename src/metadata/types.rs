/*!
 * Metadata Types
 * Operation records consumed by the simulation engine
 */

use crate::core::types::{Address, Cycles, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Metadata operation result
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Metadata errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MetadataError {
    #[error("Cannot read metadata file {path}: {message}")]
    #[diagnostic(code(metadata::io), help("Check the `File Path` entry of the configuration."))]
    Io { path: String, message: String },

    #[error("Metadata does not start with `{0}`")]
    #[diagnostic(code(metadata::missing_header))]
    MissingHeader(&'static str),

    #[error("Metadata does not end with `{0}`")]
    #[diagnostic(code(metadata::missing_footer))]
    MissingFooter(&'static str),

    #[error("Last operation is not terminated with a period")]
    #[diagnostic(
        code(metadata::missing_terminator),
        help("The final operation (normally `sys end`) must end with `.`")
    )]
    MissingTerminator,

    #[error("Operation {index}: unknown command `{command}`")]
    #[diagnostic(
        code(metadata::unknown_command),
        help("Valid commands are sys, app, cpu, dev and mem.")
    )]
    UnknownCommand { index: usize, command: String },

    #[error("Operation {index}: malformed `{text}` ({reason})")]
    #[diagnostic(code(metadata::malformed_operation))]
    MalformedOperation {
        index: usize,
        text: String,
        reason: &'static str,
    },

    #[error("Operation {index}: `{value}` is not a non-negative integer")]
    #[diagnostic(code(metadata::invalid_number))]
    InvalidNumber { index: usize, value: String },

    #[error("Invalid JSON metadata: {0}")]
    #[diagnostic(code(metadata::json))]
    Json(String),
}

/// Start or end marker of a `sys` or `app` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Direction of a device operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoDirection {
    In,
    Out,
}

impl IoDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Word used in status lines
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::In => "input",
            Self::Out => "output",
        }
    }
}

/// Kind of memory request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryAction {
    Allocate,
    Access,
}

impl MemoryAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allocate => "allocate",
            Self::Access => "access",
        }
    }
}

/// One metadata operation
///
/// A program is `app start`, any number of bursts and memory requests,
/// then `app end`. The whole list is framed by `sys start` / `sys end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Operation {
    #[serde(rename = "sys")]
    System { marker: Marker },

    #[serde(rename = "app")]
    Application {
        marker: Marker,
        #[serde(default)]
        value: u64,
    },

    #[serde(rename = "cpu")]
    Cpu { cycles: Cycles },

    #[serde(rename = "dev")]
    Io {
        direction: IoDirection,
        device: String,
        cycles: Cycles,
    },

    #[serde(rename = "mem")]
    Memory {
        action: MemoryAction,
        base: Address,
        size: Size,
    },
}

impl Operation {
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// `app start`: the cursor of a process that has not run yet
    pub fn is_app_start(&self) -> bool {
        matches!(
            self,
            Self::Application {
                marker: Marker::Start,
                ..
            }
        )
    }

    /// Any `end` marker, `sys end` included
    pub fn is_end(&self) -> bool {
        matches!(
            self,
            Self::Application {
                marker: Marker::End,
                ..
            } | Self::System {
                marker: Marker::End
            }
        )
    }

    /// Command keyword as written in metadata files
    pub const fn command(&self) -> &'static str {
        match self {
            Self::System { .. } => "sys",
            Self::Application { .. } => "app",
            Self::Cpu { .. } => "cpu",
            Self::Io { .. } => "dev",
            Self::Memory { .. } => "mem",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System { marker } => write!(f, "sys {}", marker.as_str()),
            Self::Application {
                marker: Marker::Start,
                value,
            } => write!(f, "app start, {}", value),
            Self::Application {
                marker: Marker::End,
                ..
            } => write!(f, "app end"),
            Self::Cpu { cycles } => write!(f, "cpu process, {}", cycles),
            Self::Io {
                direction,
                device,
                cycles,
            } => write!(f, "dev {}, {}, {}", direction.as_str(), device, cycles),
            Self::Memory { action, base, size } => {
                write!(f, "mem {}, {}, {}", action.as_str(), base, size)
            }
        }
    }
}
