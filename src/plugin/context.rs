//! Invocation context handed to plugins by the event pipeline.

use uuid::Uuid;

use crate::domain::{LogicalNamed, Opportunity};
use crate::plugin::registration::Stage;
use crate::plugin::trace::TraceSink;
use crate::store::RecordStore;

/// Everything a plugin sees for one creation event: the new record's
/// snapshot, the pipeline coordinates used for registration validation, the
/// re-entrancy depth counter, diagnostic identifiers, and handles to the
/// record store and trace sink.
pub struct PluginContext<'a> {
    message_name: String,
    entity_name: String,
    stage: Stage,
    depth: u32,
    correlation_id: Uuid,
    initiating_user_id: Uuid,
    target: Opportunity,
    store: &'a dyn RecordStore,
    sink: &'a dyn TraceSink,
}

impl<'a> PluginContext<'a> {
    /// Context for a first-level "Create" event carrying `target`, shaped the
    /// way the pipeline delivers it once the record has been persisted.
    pub fn for_create(
        store: &'a dyn RecordStore,
        sink: &'a dyn TraceSink,
        target: Opportunity,
    ) -> Self {
        Self {
            message_name: "Create".into(),
            entity_name: Opportunity::LOGICAL_NAME.into(),
            stage: Stage::PostOperation,
            depth: 1,
            correlation_id: Uuid::new_v4(),
            initiating_user_id: Uuid::new_v4(),
            target,
            store,
            sink,
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_message_name(mut self, name: impl Into<String>) -> Self {
        self.message_name = name.into();
        self
    }

    pub fn with_entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = name.into();
        self
    }

    pub fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = id;
        self
    }

    pub fn with_initiating_user(mut self, id: Uuid) -> Self {
        self.initiating_user_id = id;
        self
    }

    pub fn message_name(&self) -> &str {
        &self.message_name
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn initiating_user_id(&self) -> Uuid {
        self.initiating_user_id
    }

    pub fn target(&self) -> &Opportunity {
        &self.target
    }

    pub fn store(&self) -> &'a dyn RecordStore {
        self.store
    }

    /// Emits a diagnostic line decorated with the correlation and initiating
    /// user identifiers. Blank messages are dropped.
    pub fn trace(&self, message: &str) {
        if message.trim().is_empty() {
            return;
        }
        self.sink.line(&format!(
            "{message}, Correlation Id: {}, Initiating User: {}",
            self.correlation_id, self.initiating_user_id
        ));
    }
}
