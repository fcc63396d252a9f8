//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// This enum implements a **Resource-Oriented** design pattern where each
/// actor manages a specific type of resource (the [`ActorEntity`]). Instead
/// of defining ad-hoc messages for every operation, we standardize around a
/// set of lifecycle operations that apply to any append-only store.
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize
///   a new resource and responds with the stored entity.
/// - **Get**: Retrieval. Fetches the current state of the resource by id.
/// - **Find**: Store-wide lookup. Returns the first entity (in assignment
///   order) matching an [`ActorEntity::Query`].
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an
///   existing resource and responds with the updated entity.
/// - **List**: Snapshot of the whole store in assignment order.
///
/// There is deliberately no Delete: the stores in this system are
/// append-only.
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity`. It uses the associated types
/// defined in the [`ActorEntity`] trait (like `Create`, `Update`, `Query`) to
/// ensure type safety for every operation. This guarantees that you can't
/// send a "Pizza Create" payload to an "Order" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        query: T::Query,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
