use crate::clients::{MenuClient, OrderClient, RegisterClient};
use crate::register_actor::RegisterActor;
use tracing::{error, info};

/// The runtime orchestrator for the actor-based pizzeria.
///
/// `Pizzeria` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting actors that depend on each other
///   (the order client needs the menu; the order actor needs the register)
///
/// # Architecture
///
/// The system consists of three actors:
/// - **Menu Actor**: The append-only menu of pizzas
/// - **Order Actor**: The append-only order queue with status updates
/// - **Register Actor**: The running cash balance
///
/// # Example
///
/// ```ignore
/// let pizzeria = Pizzeria::open(100.0);
///
/// // Use the clients to interact with actors
/// let pizza = pizzeria.menu.add_pizza(PizzaCreate::new("Margherita", 8.0)).await?;
/// let order = pizzeria.orders.place_order("Margherita").await?;
/// let order = pizzeria.orders.complete_order(order.id).await?;
///
/// // Gracefully shut down when done
/// pizzeria.shutdown().await?;
/// ```
pub struct Pizzeria {
    /// Client for interacting with the Menu actor
    pub menu: MenuClient,

    /// Client for interacting with the Order actor
    pub orders: OrderClient,

    /// Client for interacting with the register actor
    pub register: RegisterClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Pizzeria {
    /// Opens the pizzeria with the given cash float already in the register.
    ///
    /// This method:
    /// 1. Creates the register, menu, and order actors
    /// 2. Wires up dependencies (the order client gets the menu client; the
    ///    order actor gets the register client as its run context)
    /// 3. Spawns each actor in its own Tokio task
    pub fn open(opening_float: f64) -> Self {
        // 1. Create actors
        let (register_actor, register) = RegisterActor::new(opening_float, 32);
        let (menu_actor, menu) = crate::menu_actor::new();
        let (order_actor, orders) = crate::order_actor::new(menu.clone());

        // 2. Start actors with injected context
        // Menu has no dependencies (Context = ())
        let register_handle = tokio::spawn(register_actor.run());
        let menu_handle = tokio::spawn(menu_actor.run(()));

        // Order actor deposits into the register from its on_create hook
        // (Context = RegisterClient)
        let order_handle = tokio::spawn(order_actor.run(register.clone()));

        Self {
            menu,
            orders,
            register,
            handles: vec![register_handle, menu_handle, order_handle],
        }
    }

    /// Gracefully shuts down the whole system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel, drains, and exits its event loop. The method then
    /// waits for all actor tasks and reports any that panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Closing the pizzeria...");

        // When we drop the clients, their channel senders are dropped. This
        // causes the actors' receivers to return None, signaling shutdown.
        // The order actor still holds a register clone as its context; it is
        // released when the order actor exits.
        drop(self.orders);
        drop(self.menu);
        drop(self.register);

        for handle in self.handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Pizzeria closed.");
        Ok(())
    }
}
