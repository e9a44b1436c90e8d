/*!
 * Metadata Parser
 * Reads the `Start Program Meta-Data Code:` text format
 */

use super::types::{
    IoDirection, Marker, MemoryAction, MetadataError, MetadataResult, Operation,
};
use log::debug;
use std::path::Path;

pub const METADATA_HEADER: &str = "Start Program Meta-Data Code:";
pub const METADATA_FOOTER: &str = "End Program Meta-Data Code.";

/// Load metadata from a file. Files ending in `.json` hold a JSON array of
/// operations, anything else is read as the text format.
pub fn load_metadata(path: impl AsRef<Path>) -> MetadataResult<Vec<Operation>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| MetadataError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let operations = if is_json {
        serde_json::from_str(&source).map_err(|e| MetadataError::Json(e.to_string()))?
    } else {
        parse_metadata(&source)?
    };

    debug!(
        "Loaded {} operations from {}",
        operations.len(),
        path.display()
    );
    Ok(operations)
}

/// Parse metadata text into an ordered operation list
pub fn parse_metadata(source: &str) -> MetadataResult<Vec<Operation>> {
    let source = source.trim();
    let body = source
        .strip_prefix(METADATA_HEADER)
        .ok_or(MetadataError::MissingHeader(METADATA_HEADER))?;
    let body = body
        .trim_end()
        .strip_suffix(METADATA_FOOTER)
        .ok_or(MetadataError::MissingFooter(METADATA_FOOTER))?
        .trim();

    if body.is_empty() {
        return Ok(Vec::new());
    }

    let body = body
        .strip_suffix('.')
        .ok_or(MetadataError::MissingTerminator)?;

    body.split(';')
        .enumerate()
        .map(|(index, text)| parse_operation(index, text.trim()))
        .collect()
}

fn parse_operation(index: usize, text: &str) -> MetadataResult<Operation> {
    let malformed = |reason| MetadataError::MalformedOperation {
        index,
        text: text.to_string(),
        reason,
    };

    if text.is_empty() {
        return Err(malformed("empty operation"));
    }

    let (command, rest) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| malformed("missing arguments"))?;
    let args: Vec<&str> = rest.split(',').map(str::trim).collect();

    match command {
        "sys" => match args.as_slice() {
            [marker] => Ok(Operation::System {
                marker: parse_marker(marker).ok_or_else(|| malformed("expected start or end"))?,
            }),
            _ => Err(malformed("sys takes exactly one argument")),
        },
        "app" => match args.as_slice() {
            ["start"] => Ok(Operation::Application {
                marker: Marker::Start,
                value: 0,
            }),
            ["start", value] => Ok(Operation::Application {
                marker: Marker::Start,
                value: parse_number(index, value)?,
            }),
            ["end"] => Ok(Operation::Application {
                marker: Marker::End,
                value: 0,
            }),
            _ => Err(malformed("expected `app start, N` or `app end`")),
        },
        "cpu" => match args.as_slice() {
            ["process", cycles] => Ok(Operation::Cpu {
                cycles: parse_number(index, cycles)?,
            }),
            _ => Err(malformed("expected `cpu process, CYCLES`")),
        },
        "dev" => match args.as_slice() {
            [direction, device, cycles] => {
                let direction = match *direction {
                    "in" => IoDirection::In,
                    "out" => IoDirection::Out,
                    _ => return Err(malformed("direction must be in or out")),
                };
                if device.is_empty() {
                    return Err(malformed("missing device name"));
                }
                Ok(Operation::Io {
                    direction,
                    device: device.to_string(),
                    cycles: parse_number(index, cycles)?,
                })
            }
            _ => Err(malformed("expected `dev in|out, DEVICE, CYCLES`")),
        },
        "mem" => match args.as_slice() {
            [action, base, size] => {
                let action = match *action {
                    "allocate" => MemoryAction::Allocate,
                    "access" => MemoryAction::Access,
                    _ => return Err(malformed("action must be allocate or access")),
                };
                Ok(Operation::Memory {
                    action,
                    base: parse_number(index, base)?,
                    size: parse_number(index, size)?,
                })
            }
            _ => Err(malformed("expected `mem allocate|access, BASE, SIZE`")),
        },
        other => Err(MetadataError::UnknownCommand {
            index,
            command: other.to_string(),
        }),
    }
}

fn parse_marker(text: &str) -> Option<Marker> {
    match text {
        "start" => Some(Marker::Start),
        "end" => Some(Marker::End),
        _ => None,
    }
}

fn parse_number(index: usize, text: &str) -> MetadataResult<u64> {
    text.parse().map_err(|_| MetadataError::InvalidNumber {
        index,
        value: text.to_string(),
    })
}
