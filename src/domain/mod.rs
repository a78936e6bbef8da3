pub mod common;
pub mod opportunity;
pub mod price_level;

pub use common::{Identifiable, LogicalNamed, NamedEntity};
pub use opportunity::Opportunity;
pub use price_level::{PriceLevel, ValidityWindow};
