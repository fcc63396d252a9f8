//! The cash register actor.
//!
//! The register owns a single running balance rather than a collection of
//! entities, so it does not go through the generic
//! [`ResourceActor`](crate::framework::ResourceActor). It is a small
//! hand-written actor with the same shape: an mpsc receiver, exclusive state,
//! and oneshot response channels.

pub mod error;

pub use error::*;

use crate::clients::RegisterClient;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Requests the register actor understands.
#[derive(Debug)]
pub enum RegisterRequest {
    /// Add an amount to the balance; responds with the new balance.
    Deposit {
        amount: f64,
        respond_to: oneshot::Sender<f64>,
    },
    /// Read the current balance.
    Balance { respond_to: oneshot::Sender<f64> },
}

/// The "Server" half of the register: owns the balance and the receiver.
pub struct RegisterActor {
    receiver: mpsc::Receiver<RegisterRequest>,
    balance: f64,
}

impl RegisterActor {
    /// Creates a new register actor and its client.
    ///
    /// # Arguments
    ///
    /// * `opening_float` - The cash in the register before any orders.
    /// * `buffer_size` - The capacity of the MPSC channel.
    pub fn new(opening_float: f64, buffer_size: usize) -> (Self, RegisterClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            balance: opening_float,
        };
        (actor, RegisterClient::new(sender))
    }

    /// Runs the register's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        info!(balance = self.balance, "Register opened");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegisterRequest::Deposit { amount, respond_to } => {
                    self.balance += amount;
                    info!(amount, balance = self.balance, "Deposit");
                    let _ = respond_to.send(self.balance);
                }
                RegisterRequest::Balance { respond_to } => {
                    debug!(balance = self.balance, "Balance");
                    let _ = respond_to.send(self.balance);
                }
            }
        }

        info!(balance = self.balance, "Register closed");
    }
}
