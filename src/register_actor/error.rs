//! Error types for the register actor.

use thiserror::Error;

/// Errors that can occur when talking to the register.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegisterError {
    #[error("Register closed")]
    ActorClosed,
    #[error("Register dropped response channel")]
    ActorDropped,
}
