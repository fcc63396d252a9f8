//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Order`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). The register deposit
//! happens in the `on_create` hook, so the cash movement and the queue append
//! are handled within the same actor message.

use crate::clients::RegisterClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = u32;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Query = (); // orders are only fetched by id
    type Context = RegisterClient;
    type Error = OrderError;

    /// Creates a new Order from creation parameters, starting as `Ordered`.
    fn from_create_params(id: u32, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self::new(id, params.pizza))
    }

    /// Deposits the pizza's price into the register as the order enters the
    /// queue. If the deposit fails the create is rejected and the order is
    /// not stored.
    async fn on_create(&mut self, register: &RegisterClient) -> Result<(), OrderError> {
        register
            .deposit(self.pizza.price)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }

    /// Handles updates to the Order entity.
    ///
    /// Completing an order that is already completed re-sets the same status,
    /// so re-completion is a harmless no-op.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _register: &RegisterClient,
    ) -> Result<(), OrderError> {
        match update {
            OrderUpdate::Complete => {
                self.status = OrderStatus::Completed;
                Ok(())
            }
        }
    }
}
