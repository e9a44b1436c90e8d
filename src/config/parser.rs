/*!
 * Configuration Parser
 * Reads the `Start Simulator Configuration File` text format
 */

use super::types::{ConfigError, ConfigResult, LogTo, SimConfig};
use crate::scheduler::SchedulingPolicy;
use log::debug;
use std::path::{Path, PathBuf};

pub const CONFIG_HEADER: &str = "Start Simulator Configuration File";
pub const CONFIG_FOOTER: &str = "End Simulator Configuration File.";

/// Load and validate a configuration file. Files ending in `.json` are
/// deserialized with serde, anything else is read as the text format.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<SimConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let config = if is_json {
        let config: SimConfig =
            serde_json::from_str(&source).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        config
    } else {
        parse_config(&source)?
    };

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Parse and validate configuration text
pub fn parse_config(source: &str) -> ConfigResult<SimConfig> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, CONFIG_HEADER)) => {}
        _ => return Err(ConfigError::MissingHeader(CONFIG_HEADER)),
    }

    let mut version = None;
    let mut metadata_path = None;
    let mut policy = None;
    let mut quantum = None;
    let mut memory = None;
    let mut proc_rate = None;
    let mut io_rate = None;
    let mut log_to = None;
    let mut log_file = None;
    let mut terminated = false;

    for (line_no, line) in lines {
        if line == CONFIG_FOOTER {
            terminated = true;
            break;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ConfigError::MalformedLine {
                line: line_no,
                text: line.to_string(),
            })?;
        let value = value.trim();

        match key.trim() {
            "Version/Phase" => version = Some(value.to_string()),
            "File Path" => metadata_path = Some(PathBuf::from(value)),
            "CPU Scheduling Code" => {
                policy = Some(
                    SchedulingPolicy::from_code(value)
                        .map_err(|_| ConfigError::UnsupportedPolicy(value.to_string()))?,
                )
            }
            "Quantum Time (cycles)" => {
                quantum = Some(parse_number("Quantum Time (cycles)", value)?)
            }
            "Memory Available (KB)" => {
                memory = Some(parse_number("Memory Available (KB)", value)?)
            }
            "Processor Cycle Time (msec)" => {
                proc_rate = Some(parse_number("Processor Cycle Time (msec)", value)?)
            }
            "I/O Cycle Time (msec)" => {
                io_rate = Some(parse_number("I/O Cycle Time (msec)", value)?)
            }
            "Log To" => log_to = Some(LogTo::from_code(value)?),
            "Log File Path" => log_file = Some(PathBuf::from(value)),
            other => {
                return Err(ConfigError::UnknownKey {
                    line: line_no,
                    key: other.to_string(),
                })
            }
        }
    }

    if !terminated {
        return Err(ConfigError::MissingFooter(CONFIG_FOOTER));
    }

    let config = SimConfig {
        version: version.ok_or(ConfigError::MissingField("Version/Phase"))?,
        metadata_path: metadata_path.ok_or(ConfigError::MissingField("File Path"))?,
        policy: policy.ok_or(ConfigError::MissingField("CPU Scheduling Code"))?,
        quantum_cycles: quantum.unwrap_or(0),
        memory_available: memory.ok_or(ConfigError::MissingField("Memory Available (KB)"))?,
        proc_cycle_rate: proc_rate
            .ok_or(ConfigError::MissingField("Processor Cycle Time (msec)"))?,
        io_cycle_rate: io_rate.ok_or(ConfigError::MissingField("I/O Cycle Time (msec)"))?,
        log_to: log_to.ok_or(ConfigError::MissingField("Log To"))?,
        log_file_path: log_file.ok_or(ConfigError::MissingField("Log File Path"))?,
    };
    config.validate()?;
    Ok(config)
}

fn parse_number(field: &'static str, value: &str) -> ConfigResult<u64> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        field,
        value: value.to_string(),
    })
}
