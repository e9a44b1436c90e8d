/*!
 * Diagnostic Tracing
 * Structured diagnostics for the simulator using the tracing crate
 *
 * Diagnostics go to stderr and are separate from the status-line log,
 * which is the simulator's actual output.
 */

use crate::core::types::Pid;
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - SIM_LOG: Set log level (default: warn)
/// - SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// `log` records from the library modules are bridged into the subscriber.
/// Calling this more than once is harmless; only the first call installs.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("SIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("SIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Simulator tracing initialized");
    }
}

/// Span covering one metadata operation of one process
///
/// Records the host time the operation took when dropped.
pub struct OperationSpan {
    span: tracing::Span,
    start: Instant,
}

impl OperationSpan {
    pub fn new(pid: Pid, command: &str) -> Self {
        let span = span!(
            Level::DEBUG,
            "operation",
            pid = pid,
            command = command,
            duration_us = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_outcome(&self, outcome: &str) {
        self.span.record("outcome", outcome);
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();
        debug!(duration_us = duration.as_micros() as u64, "operation completed");
    }
}

/// Helper to create an operation span
#[inline]
pub fn span_operation(pid: Pid, command: &str) -> OperationSpan {
    OperationSpan::new(pid, command)
}
