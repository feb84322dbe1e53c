#![doc(test(attr(deny(warnings))))]

//! Subtrack Core tracks users, subscriptions, and recurring expenses against
//! a remote API with a session-scoped local fallback, and derives dashboard
//! aggregates from the in-memory mirror.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod errors;
pub mod remote;
pub mod store;
pub mod sync;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack Core tracing initialized.");
    });
}
