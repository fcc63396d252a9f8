//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole actor system.
//!
//! The framework uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); actor log lines carry the entity type as a
//! structured field instead. Log levels are configured via the `RUST_LOG`
//! environment variable.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, a placed order shows up as:
//!
//! ```text
//! INFO Deposit amount=12 balance=112
//! INFO Created entity_type="Order" id=1 size=1
//! ```
//!
//! and a lookup miss as:
//!
//! ```text
//! WARN Pizza does not exist in the menu pizza_name="Calzone"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "order_processing:place_order")
        .init();
}
