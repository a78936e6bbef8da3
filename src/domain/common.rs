use uuid::Uuid;

/// Entities addressable by a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Read access to an entity's human-readable name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Exposes the logical name the host registers an entity under; registration
/// checks compare event headers against it.
pub trait LogicalNamed {
    const LOGICAL_NAME: &'static str;
}

// Re-export shared dependencies so downstream code can treat this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
