/*!
 * Event Log
 * Ordered status-line sink: console, log file, or both
 */

use super::events::SimEvent;
use crate::config::{LogTo, SimConfig};
use crate::core::errors::SimResult;
use crate::timer::format_timestamp;
use log::{debug, trace};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// One timestamped status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: Duration,
    pub event: SimEvent,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}, {}", format_timestamp(self.timestamp), self.event)
    }
}

/// Append-only status-line sink
///
/// Every line is kept in emission order. Lines are echoed to the console
/// as they arrive when monitor output is on, and written to the log file
/// by [`EventLog::flush`] when file output is on. Both sinks receive the
/// same text.
pub struct EventLog {
    log_to: LogTo,
    file_path: PathBuf,
    console: Box<dyn Write>,
    lines: Vec<LogLine>,
}

impl EventLog {
    pub fn new(log_to: LogTo, file_path: impl Into<PathBuf>) -> Self {
        Self {
            log_to,
            file_path: file_path.into(),
            console: Box::new(io::stdout()),
            lines: Vec::new(),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.log_to, config.log_file_path.clone())
    }

    /// Redirect console output
    pub fn with_console(mut self, console: impl Write + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn log_to(&self) -> LogTo {
        self.log_to
    }

    /// Append a line, echoing it to the console when configured
    pub fn record(&mut self, timestamp: Duration, event: SimEvent) -> SimResult<()> {
        let line = LogLine { timestamp, event };
        if let Some(pid) = line.event.pid() {
            trace!("PID {}: {}", pid, line.event);
        }
        if self.log_to.to_monitor() {
            writeln!(self.console, "{}", line)?;
        }
        self.lines.push(line);
        Ok(())
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn events(&self) -> impl Iterator<Item = &SimEvent> {
        self.lines.iter().map(|line| &line.event)
    }

    /// All lines as written to the sinks, one per line
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    /// Write the buffered lines to the log file when file output is on.
    /// Failing to create or write the file is fatal to the run.
    pub fn flush(&mut self) -> SimResult<()> {
        self.console.flush()?;
        if !self.log_to.to_file() {
            return Ok(());
        }

        let mut writer = BufWriter::new(File::create(&self.file_path)?);
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        debug!(
            "Wrote {} status lines to {}",
            self.lines.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("log_to", &self.log_to)
            .field("file_path", &self.file_path)
            .field("lines", &self.lines.len())
            .finish()
    }
}
