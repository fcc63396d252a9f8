//! Orchestration layer that manages the lifecycle of the actors.

pub mod pizzeria;
pub mod tracing;

pub use pizzeria::Pizzeria;
pub use self::tracing::setup_tracing;
