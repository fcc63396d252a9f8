use crate::register_actor::{RegisterError, RegisterRequest};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the register actor.
#[derive(Clone)]
pub struct RegisterClient {
    sender: mpsc::Sender<RegisterRequest>,
}

impl RegisterClient {
    pub fn new(sender: mpsc::Sender<RegisterRequest>) -> Self {
        Self { sender }
    }

    /// Adds an amount to the register and returns the new balance.
    #[instrument(skip(self))]
    pub async fn deposit(&self, amount: f64) -> Result<f64, RegisterError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegisterRequest::Deposit { amount, respond_to })
            .await
            .map_err(|_| RegisterError::ActorClosed)?;
        response.await.map_err(|_| RegisterError::ActorDropped)
    }

    /// Reads the current balance.
    #[instrument(skip(self))]
    pub async fn balance(&self) -> Result<f64, RegisterError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegisterRequest::Balance { respond_to })
            .await
            .map_err(|_| RegisterError::ActorClosed)?;
        response.await.map_err(|_| RegisterError::ActorDropped)
    }
}
