#![doc(test(attr(deny(warnings))))]

//! Pricelist Core holds the pricing logic for a sales pipeline. It resolves
//! the price level matching a record's creation year and links it to newly
//! created opportunities; a separate form layer validates price-list date
//! ranges as users edit them.

pub mod domain;
pub mod errors;
pub mod form;
pub mod plugin;
pub mod resolver;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes tracing once and logs readiness; repeated calls are no-ops.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pricelist Core tracing initialized.");
    });
}
