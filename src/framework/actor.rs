//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages
//! the lifecycle and state of entities. It implements the "Server" side of
//! the Actor Model, processing messages sequentially and ensuring exclusive
//! access to the entity store.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop.
/// This means we don't need `Mutex` or `RwLock` for the `store`! The "Actor
/// Model" gives us safety through exclusive ownership of state within the
/// task.
///
/// **Ordering**:
/// The store is a `BTreeMap` keyed by id. Ids are assigned from a monotonic
/// counter, so iterating the store visits entities in the order they were
/// created. `Find` returns the first match in that order and `List` returns
/// the whole store in that order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `ResourceActor` instance (the server), which must be run via `.run()`.
    /// 2. The `ResourceClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like other clients) that were
    /// created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Pizza" instead of "pizzeria::model::pizza::Pizza")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            // Await the async hook
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { query, respond_to } => {
                    let item = self.store.values().find(|item| item.matches(&query)).cloned();
                    let found = item.is_some();
                    debug!(entity_type, ?query, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Topping {
        id: u32,
        name: String,
        stocked: bool,
    }

    #[derive(Debug)]
    struct ToppingCreate {
        name: String,
    }

    #[derive(Debug)]
    struct ToppingUpdate {
        stocked: bool,
    }

    #[derive(Debug)]
    enum ToppingQuery {
        Name(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("topping error: {0}")]
    struct ToppingError(String);

    #[async_trait]
    impl ActorEntity for Topping {
        type Id = u32;
        type Create = ToppingCreate;
        type Update = ToppingUpdate;
        type Query = ToppingQuery;
        type Context = ();
        type Error = ToppingError;

        fn from_create_params(id: u32, params: ToppingCreate) -> Result<Self, ToppingError> {
            Ok(Self {
                id,
                name: params.name,
                stocked: true,
            })
        }

        async fn on_update(&mut self, update: ToppingUpdate, _ctx: &()) -> Result<(), ToppingError> {
            self.stocked = update.stocked;
            Ok(())
        }

        fn matches(&self, query: &ToppingQuery) -> bool {
            match query {
                ToppingQuery::Name(name) => self.name == *name,
            }
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_ids_are_monotonic_and_list_preserves_insertion_order() {
        let (actor, client) = ResourceActor::<Topping>::new(10);
        tokio::spawn(actor.run(()));

        for name in ["basil", "olives", "anchovies"] {
            client
                .create(ToppingCreate { name: name.into() })
                .await
                .unwrap();
        }

        let all = client.list().await.unwrap();
        let ids: Vec<u32> = all.iter().map(|t| t.id).collect();
        let names: Vec<&str> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(names, vec!["basil", "olives", "anchovies"]);
    }

    #[tokio::test]
    async fn test_find_returns_first_match_in_assignment_order() {
        let (actor, client) = ResourceActor::<Topping>::new(10);
        tokio::spawn(actor.run(()));

        client.create(ToppingCreate { name: "basil".into() }).await.unwrap();
        client.create(ToppingCreate { name: "olives".into() }).await.unwrap();
        // Duplicate name later in the store; Find must return the first one.
        client.create(ToppingCreate { name: "basil".into() }).await.unwrap();

        let found = client
            .find(ToppingQuery::Name("basil".into()))
            .await
            .unwrap()
            .expect("should find a match");
        assert_eq!(found.id, 1);

        let missing = client
            .find(ToppingQuery::Name("pineapple".into()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_entity_and_missing_id_is_not_found() {
        let (actor, client) = ResourceActor::<Topping>::new(10);
        tokio::spawn(actor.run(()));

        let created = client
            .create(ToppingCreate { name: "basil".into() })
            .await
            .unwrap();
        assert!(created.stocked);

        let updated = client
            .update(created.id, ToppingUpdate { stocked: false })
            .await
            .unwrap();
        assert!(!updated.stocked);

        let err = client
            .update(99, ToppingUpdate { stocked: true })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }
}
