//! Entity trait implementation for the Pizza domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Pizza`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor), including the query
//! matching that backs menu lookups.

use crate::framework::ActorEntity;
use crate::menu_actor::MenuError;
use crate::model::{Pizza, PizzaCreate, PizzaQuery};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Pizza {
    type Id = u32;
    type Create = PizzaCreate;
    type Update = (); // menu entries are immutable once added
    type Query = PizzaQuery;
    type Context = ();
    type Error = MenuError;

    /// Creates a new Pizza from creation parameters.
    fn from_create_params(id: u32, params: PizzaCreate) -> Result<Self, MenuError> {
        Ok(Self::new(id, params.name, params.price))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }

    /// Query matching for menu lookups.
    ///
    /// `Name` ignores case so a customer asking for "margherita" still finds
    /// the "Margherita"; `ExactName` is the strict form used when an order
    /// names a pizza.
    fn matches(&self, query: &PizzaQuery) -> bool {
        match query {
            PizzaQuery::Id(id) => self.id == *id,
            PizzaQuery::Name(name) => self.name.to_lowercase() == name.to_lowercase(),
            PizzaQuery::ExactName(name) => self.name == *name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> Pizza {
        Pizza::new(1, "Margherita", 8.0)
    }

    #[test]
    fn test_id_query_matches_exactly() {
        assert!(margherita().matches(&PizzaQuery::Id(1)));
        assert!(!margherita().matches(&PizzaQuery::Id(2)));
    }

    #[test]
    fn test_name_query_is_case_insensitive() {
        assert!(margherita().matches(&PizzaQuery::Name("mARgHeRiTa".into())));
        assert!(!margherita().matches(&PizzaQuery::Name("Pepperoni".into())));
    }

    #[test]
    fn test_exact_name_query_is_case_sensitive() {
        assert!(margherita().matches(&PizzaQuery::ExactName("Margherita".into())));
        assert!(!margherita().matches(&PizzaQuery::ExactName("margherita".into())));
    }
}
