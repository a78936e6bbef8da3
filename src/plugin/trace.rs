//! Trace sinks receiving plugin diagnostics.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Free-text diagnostic sink fed by the plugin context.
///
/// Implementations must never panic; a diagnostic line may be dropped, but
/// emitting one must not interrupt the logic that produced it.
pub trait TraceSink: Send + Sync {
    fn line(&self, message: &str);
}

/// Forwards every trace line to the `tracing` subscriber at info level.
#[derive(Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn line(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Records trace lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryTrace {
    lines: Mutex<Vec<String>>,
}

impl MemoryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns every recorded line in the order it was emitted.
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl TraceSink for MemoryTrace {
    fn line(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_trace_preserves_emission_order() {
        let trace = MemoryTrace::new();
        trace.line("first");
        trace.line("second");

        assert_eq!(trace.lines(), vec!["first", "second"]);
    }
}
