//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{MenuClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// The order client needs the menu to resolve pizza names before creating an
/// order; the register client is injected later via
/// [`ResourceActor::run`].
pub fn new(menu_client: MenuClient) -> (ResourceActor<Order>, OrderClient) {
    let (actor, inner) = ResourceActor::new(32);
    (actor, OrderClient::new(inner, menu_client))
}
