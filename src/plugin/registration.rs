//! Pipeline registration data used to validate how a plugin was invoked.

/// Point in the host's event pipeline a plugin is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreValidation,
    PreOperation,
    PostOperation,
}

/// The event a plugin expects to fire under: a pipeline stage, a message
/// name, and optionally a single entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    stage: Stage,
    message: String,
    entity: Option<String>,
}

impl Registration {
    /// Registration for `message` at `stage`, matching any entity.
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            entity: None,
        }
    }

    /// Restricts the registration to one entity logical name.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Whether an invocation at `stage`, for `message` on `entity`, satisfies
    /// this registration. Message and entity names compare
    /// case-insensitively; a registration without an entity matches any.
    pub fn matches(&self, stage: Stage, message: &str, entity: &str) -> bool {
        self.stage == stage
            && self.message.eq_ignore_ascii_case(message)
            && self
                .entity
                .as_deref()
                .map_or(true, |expected| expected.eq_ignore_ascii_case(entity))
    }
}
