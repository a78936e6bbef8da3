//! Event-pipeline plumbing: the plugin contract and the runner that drives
//! one invocation end to end.

pub mod context;
pub mod registration;
pub mod set_price_list;
pub mod trace;

pub use context::PluginContext;
pub use registration::{Registration, Stage};
pub use set_price_list::{AssignOutcome, SetPriceListOnCreate};
pub use trace::{LogTrace, MemoryTrace, TraceSink};

use crate::errors::StoreError;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The plugin fired under a pipeline event it was not written for. This
    /// signals a deployment mistake, not a runtime condition.
    #[error("{0}")]
    Registration(String),
    /// Uniform wrapper for any failure inside a plugin body. The original
    /// message is preserved; rollback belongs to the host's transaction.
    #[error("Plugin execution failed: {0}")]
    Execution(String),
}

impl From<StoreError> for PluginError {
    fn from(err: StoreError) -> Self {
        PluginError::Execution(err.to_string())
    }
}

/// A unit of logic attached to the host's event pipeline.
pub trait Plugin {
    type Output;

    /// Short name used in trace lines.
    fn name(&self) -> &str;

    /// The event this plugin expects to fire under.
    fn registration(&self) -> &Registration;

    /// The plugin body. [`PluginRunner`] invokes it only after validating the
    /// registration against the context.
    fn run(&self, ctx: &PluginContext<'_>) -> PluginResult<Self::Output>;
}

/// Drives a [`Plugin`] through one invocation, from the entry trace through
/// registration validation to the plugin body and the exit trace.
pub struct PluginRunner<'a, P: Plugin> {
    plugin: &'a P,
}

impl<'a, P: Plugin> PluginRunner<'a, P> {
    pub fn new(plugin: &'a P) -> Self {
        Self { plugin }
    }

    /// Runs the plugin against `ctx`.
    ///
    /// A registration mismatch is reported as [`PluginError::Registration`]
    /// without running the body. Errors are traced, and the exit trace is
    /// emitted on every path.
    pub fn execute(&self, ctx: &PluginContext<'_>) -> PluginResult<P::Output> {
        ctx.trace(&format!("Entered {}.execute()", self.plugin.name()));
        let result = self.dispatch(ctx);
        if let Err(err) = &result {
            ctx.trace(&format!("Error: {err}"));
        }
        ctx.trace(&format!("Exiting {}.execute()", self.plugin.name()));
        result
    }

    fn dispatch(&self, ctx: &PluginContext<'_>) -> PluginResult<P::Output> {
        let registration = self.plugin.registration();
        if !registration.matches(ctx.stage(), ctx.message_name(), ctx.entity_name()) {
            let message = match registration.entity() {
                Some(entity) => format!(
                    "{} should be registered for the {} message of the {} entity",
                    self.plugin.name(),
                    registration.message(),
                    entity
                ),
                None => format!(
                    "{} should be registered for the {} message",
                    self.plugin.name(),
                    registration.message()
                ),
            };
            return Err(PluginError::Registration(message));
        }
        ctx.trace(&format!(
            "{} is firing for entity: {}, message: {}",
            self.plugin.name(),
            ctx.entity_name(),
            ctx.message_name()
        ));
        self.plugin.run(ctx)
    }
}
