//! The order side of the domain: the queue entries and their status.

use crate::model::Pizza;
use serde::{Deserialize, Serialize};

/// Where an order is in its (two-step) life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Ordered,
    Completed,
}

/// A placed order.
///
/// `pizza` is a snapshot of the menu entry at the moment the order was
/// placed. Orders are never removed from the queue; the only mutation is the
/// status moving forward via [`OrderUpdate::Complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub pizza: Pizza,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new order for the given pizza, starting as `Ordered`.
    pub fn new(id: u32, pizza: Pizza) -> Self {
        Self {
            id,
            pizza,
            status: OrderStatus::Ordered,
        }
    }
}

/// DTO for placing an order: the resolved menu snapshot to order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub pizza: Pizza,
}

/// The only update an order accepts.
///
/// Making this an enum with a single forward transition means a backward
/// move (`Completed` → `Ordered`) cannot even be requested.
#[derive(Debug, Clone)]
pub enum OrderUpdate {
    Complete,
}
