//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Pizza,
//! Order, …) must implement to be managed by the generic `ResourceActor`. It
//! specifies associated types for ids, DTOs, queries, context, and errors,
//! and provides lifecycle hooks (`on_create`, `on_update`, `matches`).
//! Implementing this trait gives the framework a uniform API for any domain
//! model.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (Pizza,
/// Order) must satisfy, we can write the `ResourceActor` logic *once* and
/// reuse it everywhere.
///
/// We use "Associated Types" (type Id, type Create, etc.) to enforce type
/// safety. A `Pizza` entity requires a `PizzaCreate` payload, and you can't
/// accidentally send it an `OrderCreate` payload. The compiler prevents this
/// class of bugs entirely.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks
/// (e.g., calling other actors). It also defines a `Context` type, which is
/// injected into every hook. This allows "Late Binding" of dependencies
/// (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered
    /// so the store iterates entities in assignment order.
    type Id: Ord + Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Store-wide lookup criteria (e.g., "first pizza with this name").
    /// Use `()` if the resource is only ever fetched by id.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the
    /// whole actor) rather than per-message error types. Clients deal with a
    /// single error type, which keeps pattern matching simple at the cost of
    /// each hook's signature admitting the union of all failure modes.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform side effects (e.g., depositing into another
    /// actor). An error here rejects the create and the entity is not stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Query Hook (Sync) ---

    /// Whether this entity satisfies a store-wide query.
    /// The default matches nothing, which is correct for resources that are
    /// only fetched by id.
    fn matches(&self, _query: &Self::Query) -> bool {
        false
    }
}
