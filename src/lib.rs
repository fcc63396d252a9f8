#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pizzeria
//!
//! > **An actor-based pizza ordering workflow in Rust.**
//!
//! This crate models a small pizzeria: a menu of pizzas, an append-only order
//! queue, and a cash register. It is built on a generic, type-safe actor
//! framework so each piece of state is owned by exactly one Tokio task.
//!
//! ## 🏗️ Design Philosophy
//!
//! Every store in the system (menu, order queue) is a resource managed by a
//! generic [`ResourceActor`](framework::ResourceActor). Actors process their
//! messages sequentially, so no locks are needed for the stores, and the
//! bookkeeping invariants (monotonic ids, append-only queues, forward-only
//! order status) hold by construction.
//!
//! The cash register is a small hand-written actor of its own: it owns a
//! single balance rather than a collection of entities, so the generic
//! framework would be the wrong shape for it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers the menu and the order queue.
//! - **Role**: Separates the *business logic* (your entity) from the *plumbing* (channels, message loops, error handling).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Actors don't exist in a vacuum. The lifecycle module handles this.
//! - **Role**: Spins up the menu, order, and register actors and wires them together.
//! - **Key items**: [`Pizzeria`](lifecycle::Pizzeria), [`shutdown`](lifecycle::Pizzeria::shutdown).
//!
//! ### 3. The Interface ([`clients`])
//! We don't expose raw message passing to the rest of the app.
//! - **Role**: Wraps the generic `ResourceClient` in domain-specific clients that speak the pizzeria's language.
//! - **Key items**: [`MenuClient`](clients::MenuClient), [`OrderClient`](clients::OrderClient), [`RegisterClient`](clients::RegisterClient).
//!
//! ### 4. The Implementation ([`menu_actor`], [`order_actor`], [`register_actor`])
//! The actual domain actors built using the framework.
//! - **Role**: Concrete implementations of the `ActorEntity` trait plus the register's own message loop.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! The demo seeds the menu, places a few orders (including one for a pizza
//! that is not on the menu, to show the failure path), and logs the final
//! menu, register balance, and order queue.
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning
//! full actors, and the `tests/` directory for full-system integration tests.

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod register_actor;
