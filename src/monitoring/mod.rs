/*!
 * Simulation Monitoring
 * Status-line events, the event log sink, and diagnostic tracing
 */

mod event_log;
mod events;
mod tracer;

pub use event_log::{EventLog, LogLine};
pub use events::SimEvent;
pub use tracer::{init_tracing, span_operation, OperationSpan};
