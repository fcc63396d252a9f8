use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{Pizza, PizzaCreate, PizzaQuery};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Pizza>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Pizza>) -> Self {
        Self { inner }
    }

    /// Adds a pizza to the menu and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn add_pizza(&self, pizza: PizzaCreate) -> Result<Pizza, MenuError> {
        debug!("Sending request");
        self.inner.create(pizza).await.map_err(Self::map_error)
    }

    /// Looks up the first menu entry matching the query, front of the menu
    /// first.
    #[instrument(skip(self))]
    pub async fn pizza_detail(&self, query: PizzaQuery) -> Result<Option<Pizza>, MenuError> {
        debug!("Sending request");
        self.inner.find(query).await.map_err(Self::map_error)
    }

    /// Returns the menu in the order pizzas were added.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Pizza>, MenuError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Pizza> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Pizza> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> MenuError {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
