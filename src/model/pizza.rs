//! The menu side of the domain: pizzas and the ways to look them up.

use serde::{Deserialize, Serialize};

/// A pizza on the menu.
///
/// Menu entries are append-only: once added, a pizza is never deleted and
/// never mutated. Orders carry a copy of the pizza as it was at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl Pizza {
    /// Creates a new Pizza instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Pizza name as it appears on the menu
    /// * `price` - Pizza price
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// DTO for adding a pizza to the menu.
#[derive(Debug, Clone)]
pub struct PizzaCreate {
    pub name: String,
    pub price: f64,
}

impl PizzaCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Lookup criteria for the menu.
///
/// Each way of identifying a pizza is its own variant, so an unsupported
/// identifier kind cannot be expressed at all.
#[derive(Debug, Clone, PartialEq)]
pub enum PizzaQuery {
    /// Exact id match.
    Id(u32),
    /// Case-insensitive name match, for customer-facing lookups.
    Name(String),
    /// Case-sensitive name match, as used when an order names a pizza.
    ExactName(String),
}
