//! Demo entry point: runs a day at the pizzeria.
//!
//! Seeds the menu, places a few orders (including one for a pizza that is not
//! on the menu, to show the failure path), completes some of them, and logs
//! the final menu, register balance, and order queue.

use pizzeria::lifecycle::{setup_tracing, Pizzeria};
use pizzeria::model::{PizzaCreate, PizzaQuery};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Opening the pizzeria");

    // Open with 100 in the register
    let pizzeria = Pizzeria::open(100.0);

    // The standing menu
    let standing = [
        ("Margherita", 8.0),
        ("Pepperoni", 10.0),
        ("Hawaiian", 10.0),
        ("Veggie", 9.0),
    ];
    // Today's specials
    let specials = [
        ("Chicken Bacon Ranch", 12.0),
        ("BBQ Chicken", 12.0),
        ("Spicy Sausage", 11.0),
    ];

    let span = tracing::info_span!("menu_setup");
    async {
        for (name, price) in standing.into_iter().chain(specials) {
            let pizza = pizzeria
                .menu
                .add_pizza(PizzaCreate::new(name, price))
                .await
                .map_err(|e| e.to_string())?;
            info!(id = pizza.id, name = %pizza.name, price = pizza.price, "Pizza added to menu");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    async {
        for name in ["Chicken Bacon Ranch", "Pepperoni"] {
            match pizzeria.orders.place_order(name).await {
                Ok(order) => info!(order_id = order.id, pizza = %order.pizza.name, "Order placed"),
                Err(e) => error!(error = %e, "Order failed"),
            }
        }

        match pizzeria.orders.complete_order(1).await {
            Ok(order) => info!(order_id = order.id, "Order completed"),
            Err(e) => error!(error = %e, "Completion failed"),
        }

        match pizzeria.orders.place_order("Veggie").await {
            Ok(order) => info!(order_id = order.id, pizza = %order.pizza.name, "Order placed"),
            Err(e) => error!(error = %e, "Order failed"),
        }

        match pizzeria.orders.complete_order(2).await {
            Ok(order) => info!(order_id = order.id, "Order completed"),
            Err(e) => error!(error = %e, "Completion failed"),
        }

        // Two misses to show the failure paths: a pizza nobody sells and an
        // order id nobody was handed
        if let Err(e) = pizzeria.orders.place_order("Calzone").await {
            error!(error = %e, "Order failed");
        }
        if let Err(e) = pizzeria.orders.complete_order(42).await {
            error!(error = %e, "Completion failed");
        }
    }
    .instrument(span)
    .await;

    // Customer-facing lookups: by (case-insensitive) name and by id
    match pizzeria
        .menu
        .pizza_detail(PizzaQuery::Name("margherita".to_string()))
        .await
        .map_err(|e| e.to_string())?
    {
        Some(pizza) => info!(id = pizza.id, name = %pizza.name, price = pizza.price, "Pizza detail"),
        None => info!("No such pizza"),
    }
    match pizzeria
        .menu
        .pizza_detail(PizzaQuery::Id(5))
        .await
        .map_err(|e| e.to_string())?
    {
        Some(pizza) => info!(id = pizza.id, name = %pizza.name, price = pizza.price, "Pizza detail"),
        None => info!("No such pizza"),
    }

    // Final report: what the register and the queues look like at closing
    let menu = pizzeria.menu.list().await.map_err(|e| e.to_string())?;
    let balance = pizzeria.register.balance().await.map_err(|e| e.to_string())?;
    let queue = pizzeria.orders.list().await.map_err(|e| e.to_string())?;

    info!(entries = menu.len(), ?menu, "Menu");
    info!(balance, "Cash in register");
    info!(orders = queue.len(), ?queue, "Order queue");

    // Shutdown system gracefully
    pizzeria.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
