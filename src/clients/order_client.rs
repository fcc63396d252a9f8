use crate::clients::actor_client::ActorClient;
use crate::clients::MenuClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderUpdate, PizzaQuery};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Placing an order resolves the pizza through the menu client; the register
/// deposit then happens in the order's `on_create` hook inside the actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: MenuClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, menu: MenuClient) -> Self {
        Self { inner, menu }
    }

    /// Places an order for the named pizza.
    ///
    /// The name must match a menu entry exactly (case-sensitive). If it
    /// doesn't, the order is rejected with [`OrderError::UnknownPizza`] and
    /// nothing changes: no order is queued and the register is untouched.
    #[instrument(skip(self))]
    pub async fn place_order(&self, pizza_name: &str) -> Result<Order, OrderError> {
        debug!("Sending request");
        let pizza = self
            .menu
            .pizza_detail(PizzaQuery::ExactName(pizza_name.to_string()))
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        let pizza = match pizza {
            Some(pizza) => pizza,
            None => {
                warn!(pizza_name, "Pizza does not exist in the menu");
                return Err(OrderError::UnknownPizza(pizza_name.to_string()));
            }
        };

        self.inner
            .create(OrderCreate { pizza })
            .await
            .map_err(Self::map_error)
    }

    /// Marks the order as completed and returns the updated order.
    ///
    /// Completing an order that is already completed succeeds and leaves it
    /// completed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: u32) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate::Complete)
            .await
            .map_err(Self::map_error)
    }

    /// Returns the order queue in placement order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
