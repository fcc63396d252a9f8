use pizzeria::clients::actor_client::ActorClient;
use pizzeria::lifecycle::Pizzeria;
use pizzeria::model::{OrderStatus, PizzaCreate, PizzaQuery};
use pizzeria::order_actor::OrderError;
use std::collections::HashSet;

/// The full menu used by most tests: the standing menu plus the specials.
const MENU: [(&str, f64); 7] = [
    ("Margherita", 8.0),
    ("Pepperoni", 10.0),
    ("Hawaiian", 10.0),
    ("Veggie", 9.0),
    ("Chicken Bacon Ranch", 12.0),
    ("BBQ Chicken", 12.0),
    ("Spicy Sausage", 11.0),
];

async fn seed_menu(pizzeria: &Pizzeria) {
    for (name, price) in MENU {
        pizzeria
            .menu
            .add_pizza(PizzaCreate::new(name, price))
            .await
            .expect("Failed to add pizza");
    }
}

/// Full end-to-end test with all real actors: a day at the pizzeria.
#[tokio::test]
async fn test_full_pizzeria_integration() {
    let pizzeria = Pizzeria::open(100.0);
    seed_menu(&pizzeria).await;

    // The menu preserves insertion order and assigns ids 1..=7
    let menu = pizzeria.menu.list().await.expect("Failed to list menu");
    assert_eq!(menu.len(), 7);
    let ids: Vec<u32> = menu.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    let names: Vec<&str> = menu.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Margherita",
            "Pepperoni",
            "Hawaiian",
            "Veggie",
            "Chicken Bacon Ranch",
            "BBQ Chicken",
            "Spicy Sausage"
        ]
    );

    // Place an order: the snapshot carries the menu entry, the register
    // grows by its price
    let order = pizzeria
        .orders
        .place_order("Chicken Bacon Ranch")
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, 1);
    assert_eq!(order.pizza.id, 5);
    assert_eq!(order.pizza.price, 12.0);
    assert_eq!(order.status, OrderStatus::Ordered);
    assert_eq!(pizzeria.register.balance().await.unwrap(), 112.0);

    let order = pizzeria
        .orders
        .place_order("Pepperoni")
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, 2);
    assert_eq!(pizzeria.register.balance().await.unwrap(), 122.0);

    // Completing an order flips exactly that order's status
    let completed = pizzeria
        .orders
        .complete_order(1)
        .await
        .expect("Failed to complete order");
    assert_eq!(completed.id, 1);
    assert_eq!(completed.status, OrderStatus::Completed);

    let order = pizzeria
        .orders
        .place_order("Veggie")
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, 3);
    assert_eq!(pizzeria.register.balance().await.unwrap(), 131.0);

    pizzeria
        .orders
        .complete_order(2)
        .await
        .expect("Failed to complete order");

    // Closing state: register total and queue statuses in placement order
    assert_eq!(pizzeria.register.balance().await.unwrap(), 131.0);
    let queue = pizzeria.orders.list().await.expect("Failed to list orders");
    assert_eq!(queue.len(), 3);
    let statuses: Vec<OrderStatus> = queue.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Completed,
            OrderStatus::Completed,
            OrderStatus::Ordered
        ]
    );

    pizzeria.shutdown().await.expect("Failed to shutdown");
}

/// An unknown pizza name must not queue anything or touch the register.
#[tokio::test]
async fn test_place_order_unknown_pizza_changes_nothing() {
    let pizzeria = Pizzeria::open(100.0);
    seed_menu(&pizzeria).await;

    let err = pizzeria.orders.place_order("Calzone").await.unwrap_err();
    assert!(matches!(err, OrderError::UnknownPizza(_)));

    // Ordering matches names exactly, so even a real pizza in the wrong case
    // is rejected
    let err = pizzeria.orders.place_order("margherita").await.unwrap_err();
    assert!(matches!(err, OrderError::UnknownPizza(_)));

    assert_eq!(pizzeria.register.balance().await.unwrap(), 100.0);
    assert!(pizzeria.orders.list().await.unwrap().is_empty());

    pizzeria.shutdown().await.expect("Failed to shutdown");
}

/// Completing an unknown id fails and leaves the queue untouched;
/// re-completing a completed order is a harmless no-op.
#[tokio::test]
async fn test_complete_order_unknown_id_and_recompletion() {
    let pizzeria = Pizzeria::open(100.0);
    seed_menu(&pizzeria).await;

    pizzeria
        .orders
        .place_order("Margherita")
        .await
        .expect("Failed to place order");

    let err = pizzeria.orders.complete_order(7).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)));
    let queue = pizzeria.orders.list().await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].status, OrderStatus::Ordered);

    let first = pizzeria.orders.complete_order(1).await.unwrap();
    assert_eq!(first.status, OrderStatus::Completed);
    let again = pizzeria.orders.complete_order(1).await.unwrap();
    assert_eq!(again.status, OrderStatus::Completed);

    pizzeria.shutdown().await.expect("Failed to shutdown");
}

/// Menu lookups: by name ignoring case, by exact name, and by id.
#[tokio::test]
async fn test_pizza_detail_lookups() {
    let pizzeria = Pizzeria::open(100.0);
    seed_menu(&pizzeria).await;

    let pizza = pizzeria
        .menu
        .pizza_detail(PizzaQuery::Name("mARgHeRiTa".to_string()))
        .await
        .unwrap()
        .expect("Case-insensitive lookup should match");
    assert_eq!(pizza.id, 1);

    let miss = pizzeria
        .menu
        .pizza_detail(PizzaQuery::ExactName("margherita".to_string()))
        .await
        .unwrap();
    assert!(miss.is_none(), "Exact lookup must be case-sensitive");

    let pizza = pizzeria
        .menu
        .pizza_detail(PizzaQuery::Id(2))
        .await
        .unwrap()
        .expect("Id lookup should match");
    assert_eq!(pizza.name, "Pepperoni");

    let miss = pizzeria
        .menu
        .pizza_detail(PizzaQuery::Id(99))
        .await
        .unwrap();
    assert!(miss.is_none());

    // The generic by-id fetch from ActorClient works too
    let pizza = pizzeria.menu.get(1).await.unwrap();
    assert!(pizza.is_some());

    pizzeria.shutdown().await.expect("Failed to shutdown");
}

/// Test concurrent order placement to verify actor isolation: every order is
/// queued with a unique id and the register ends up with the exact sum.
#[tokio::test]
async fn test_concurrent_orders() {
    let pizzeria = Pizzeria::open(100.0);
    seed_menu(&pizzeria).await;

    let mut handles = vec![];
    for _i in 0..10 {
        let order_client = pizzeria.orders.clone();
        let handle = tokio::spawn(async move { order_client.place_order("Margherita").await });
        handles.push(handle);
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let order = handle.await.unwrap().expect("Order should succeed");
        ids.insert(order.id);
    }
    assert_eq!(ids.len(), 10, "Order ids must be unique");

    assert_eq!(pizzeria.register.balance().await.unwrap(), 180.0);
    assert_eq!(pizzeria.orders.list().await.unwrap().len(), 10);

    pizzeria.shutdown().await.expect("Failed to shutdown");
}
