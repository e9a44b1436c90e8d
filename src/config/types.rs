/*!
 * Configuration Types
 * Simulator configuration and its validation errors
 */

use crate::core::serde::is_zero_u64;
use crate::core::types::{Millis, Size};
use crate::scheduler::SchedulingPolicy;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration result
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {message}")]
    #[diagnostic(code(config::io))]
    Io { path: String, message: String },

    #[error("Configuration does not start with `{0}`")]
    #[diagnostic(code(config::missing_header))]
    MissingHeader(&'static str),

    #[error("Configuration does not end with `{0}`")]
    #[diagnostic(code(config::missing_footer))]
    MissingFooter(&'static str),

    #[error("Line {line}: expected `Key: Value`, found `{text}`")]
    #[diagnostic(code(config::malformed_line))]
    MalformedLine { line: usize, text: String },

    #[error("Line {line}: unknown configuration key `{key}`")]
    #[diagnostic(code(config::unknown_key))]
    UnknownKey { line: usize, key: String },

    #[error("Missing configuration entry `{0}`")]
    #[diagnostic(code(config::missing_field))]
    MissingField(&'static str),

    #[error("Invalid value `{value}` for `{field}`")]
    #[diagnostic(
        code(config::invalid_value),
        help("Numeric entries must be non-negative integers.")
    )]
    InvalidValue { field: &'static str, value: String },

    #[error("Unsupported CPU scheduling code `{0}`")]
    #[diagnostic(
        code(config::unsupported_policy),
        help("Supported scheduling codes are FCFS-N and SJF-N.")
    )]
    UnsupportedPolicy(String),

    #[error("Invalid log destination `{0}`")]
    #[diagnostic(code(config::invalid_log_to), help("Use Monitor, File or Both."))]
    InvalidLogTo(String),

    #[error("`{0}` must be greater than zero")]
    #[diagnostic(code(config::zero_rate))]
    ZeroRate(&'static str),

    #[error("Invalid JSON configuration: {0}")]
    #[diagnostic(code(config::json))]
    Json(String),
}

/// Where status lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTo {
    #[default]
    Monitor,
    File,
    Both,
}

impl LogTo {
    pub fn from_code(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monitor" => Ok(Self::Monitor),
            "file" => Ok(Self::File),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::InvalidLogTo(s.to_string())),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "Monitor",
            Self::File => "File",
            Self::Both => "Both",
        }
    }

    #[inline]
    pub const fn to_monitor(&self) -> bool {
        matches!(self, Self::Monitor | Self::Both)
    }

    #[inline]
    pub const fn to_file(&self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    #[serde(default = "default_version")]
    pub version: String,
    pub metadata_path: PathBuf,
    pub policy: SchedulingPolicy,
    /// Parsed for format compatibility; both policies are non-preemptive
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub quantum_cycles: u64,
    pub memory_available: Size,
    pub proc_cycle_rate: Millis,
    pub io_cycle_rate: Millis,
    #[serde(default)]
    pub log_to: LogTo,
    pub log_file_path: PathBuf,
}

fn default_version() -> String {
    "4.0".to_string()
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            metadata_path: PathBuf::from("metadata.mdf"),
            policy: SchedulingPolicy::FcfsN,
            quantum_cycles: 3,
            memory_available: 12_000,
            proc_cycle_rate: 10,
            io_cycle_rate: 20,
            log_to: LogTo::Monitor,
            log_file_path: PathBuf::from("logfile.lgf"),
        }
    }
}

impl SimConfig {
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_memory(mut self, memory_available: Size) -> Self {
        self.memory_available = memory_available;
        self
    }

    pub fn with_cycle_rates(mut self, proc_cycle_rate: Millis, io_cycle_rate: Millis) -> Self {
        self.proc_cycle_rate = proc_cycle_rate;
        self.io_cycle_rate = io_cycle_rate;
        self
    }

    pub fn with_log_to(mut self, log_to: LogTo, log_file_path: impl Into<PathBuf>) -> Self {
        self.log_to = log_to;
        self.log_file_path = log_file_path.into();
        self
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.proc_cycle_rate == 0 {
            return Err(ConfigError::ZeroRate("Processor Cycle Time (msec)"));
        }
        if self.io_cycle_rate == 0 {
            return Err(ConfigError::ZeroRate("I/O Cycle Time (msec)"));
        }
        Ok(())
    }
}

impl fmt::Display for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config File Display")?;
        writeln!(f, "-------------------")?;
        writeln!(f, "Version                : {}", self.version)?;
        writeln!(f, "Program file name      : {}", self.metadata_path.display())?;
        writeln!(f, "CPU schedule selection : {}", self.policy)?;
        writeln!(f, "Quantum time           : {}", self.quantum_cycles)?;
        writeln!(f, "Memory Available       : {}", self.memory_available)?;
        writeln!(f, "Process cycle rate     : {}", self.proc_cycle_rate)?;
        writeln!(f, "I/O cycle rate         : {}", self.io_cycle_rate)?;
        writeln!(f, "Log to selection       : {}", self.log_to.as_str())?;
        writeln!(f, "Log file name          : {}", self.log_file_path.display())
    }
}
