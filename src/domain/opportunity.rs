use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, LogicalNamed, NamedEntity};

/// A sales-pipeline record that receives a price-list assignment.
///
/// Created by the host before any of this logic runs. The creation timestamp
/// is a read-only input; `price_level_id` is the one field this crate writes,
/// once, immediately after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: Uuid,
    pub name: String,
    pub created_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level_id: Option<Uuid>,
}

impl Opportunity {
    /// Creates an opportunity stamped with the given creation time.
    pub fn new(name: impl Into<String>, created_on: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_on,
            price_level_id: None,
        }
    }

    /// Links the opportunity to a price level identifier.
    pub fn with_price_level(mut self, price_level_id: Uuid) -> Self {
        self.price_level_id = Some(price_level_id);
        self
    }
}

impl Identifiable for Opportunity {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Opportunity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl LogicalNamed for Opportunity {
    const LOGICAL_NAME: &'static str = "opportunity";
}
