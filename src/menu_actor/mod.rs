//! Menu-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::Pizza;

/// Creates a new Menu actor and its client.
pub fn new() -> (ResourceActor<Pizza>, MenuClient) {
    let (actor, inner) = ResourceActor::new(32);
    (actor, MenuClient::new(inner))
}
