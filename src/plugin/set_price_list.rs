//! Links newly created opportunities to the price list for their creation
//! year.

use uuid::Uuid;

use crate::domain::{Identifiable, LogicalNamed, NamedEntity, Opportunity};
use crate::plugin::{Plugin, PluginContext, PluginResult, PluginRunner, Registration, Stage};
use crate::resolver::PriceLevelResolver;

/// Outcome of one create-event invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// A price level matched the creation year and was linked to the record.
    Assigned(Uuid),
    /// No price level matched; the record was left untouched.
    NoMatch,
    /// The re-entrancy guard suppressed the invocation.
    Skipped { depth: u32 },
}

/// Post-operation plugin that assigns the calendar-year price level to an
/// opportunity right after it is created.
pub struct SetPriceListOnCreate {
    registration: Registration,
}

impl SetPriceListOnCreate {
    pub fn new() -> Self {
        Self {
            registration: Registration::new(Stage::PostOperation, "Create")
                .with_entity(Opportunity::LOGICAL_NAME),
        }
    }

    /// Runs one full create-event invocation, registration validation and
    /// enter/exit traces included.
    pub fn on_created(&self, ctx: &PluginContext<'_>) -> PluginResult<AssignOutcome> {
        PluginRunner::new(self).execute(ctx)
    }
}

impl Default for SetPriceListOnCreate {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SetPriceListOnCreate {
    type Output = AssignOutcome;

    fn name(&self) -> &str {
        "SetPriceListOnCreate"
    }

    fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Depth guard first, then resolution and at most one update call. A
    /// missing price level is a valid outcome, not an error.
    fn run(&self, ctx: &PluginContext<'_>) -> PluginResult<AssignOutcome> {
        let depth = ctx.depth();
        ctx.trace(&format!("Execution context depth = {depth}"));
        if depth > 1 {
            return Ok(AssignOutcome::Skipped { depth });
        }

        let target = ctx.target();
        ctx.trace(&format!(
            "Target: {} - {}",
            Opportunity::LOGICAL_NAME,
            target.id()
        ));

        match PriceLevelResolver::resolve(ctx.store(), target.created_on)? {
            Some(level) => {
                ctx.trace(&format!("Price level found: {}", level.name()));
                ctx.store().assign_price_level(target.id(), level.id())?;
                ctx.trace("Price level set");
                Ok(AssignOutcome::Assigned(level.id()))
            }
            None => {
                ctx.trace("Price level not found");
                Ok(AssignOutcome::NoMatch)
            }
        }
    }
}
