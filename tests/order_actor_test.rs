use pizzeria::clients::{actor_client::ActorClient, MenuClient};
use pizzeria::framework::mock::MockClient;
use pizzeria::model::{OrderStatus, Pizza};
use pizzeria::order_actor::OrderError;
use pizzeria::register_actor::RegisterActor;

/// Integration test: real Order actor with a mocked menu dependency.
/// This exercises the placement flow (name resolution, register deposit,
/// queue append) while isolating it from the real menu actor.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor and real register (the deposit is the behavior under test)
/// - Mocked menu client (isolates the lookup dependency)
#[tokio::test]
async fn test_order_actor_with_mocked_menu() {
    // Setup mock dependency: place_order will resolve the name via the menu
    let mut menu_mock = MockClient::<Pizza>::new();
    menu_mock
        .expect_find()
        .return_ok(Some(Pizza::new(1, "Margherita", 8.0)));

    let menu_client = MenuClient::new(menu_mock.client());

    // Real register, opened with 100
    let (register_actor, register_client) = RegisterActor::new(100.0, 8);
    let register_handle = tokio::spawn(register_actor.run());

    // Create REAL Order actor using the factory function
    let (order_actor, order_client) = pizzeria::order_actor::new(menu_client);
    let actor_handle = tokio::spawn(order_actor.run(register_client.clone()));

    // Execute: this runs through the real Order actor
    let order = order_client
        .place_order("Margherita")
        .await
        .expect("Order should be placed");
    assert_eq!(order.id, 1);
    assert_eq!(order.pizza.name, "Margherita");
    assert_eq!(order.status, OrderStatus::Ordered);

    // The on_create hook deposited the price
    assert_eq!(register_client.balance().await.unwrap(), 108.0);

    // Verify we can retrieve the order from the real actor
    let retrieved = order_client.get(1).await.unwrap();
    assert_eq!(retrieved, Some(order));

    // Verify the mock was called as expected
    menu_mock.verify();

    // Cleanup
    drop(order_client);
    actor_handle.await.unwrap();
    drop(register_client);
    register_handle.await.unwrap();
}

/// A menu miss rejects the order before it ever reaches the order actor:
/// nothing is queued and no deposit is made.
#[tokio::test]
async fn test_order_actor_rejects_unknown_pizza() {
    let mut menu_mock = MockClient::<Pizza>::new();
    menu_mock.expect_find().return_ok(None);

    let menu_client = MenuClient::new(menu_mock.client());

    let (register_actor, register_client) = RegisterActor::new(100.0, 8);
    let register_handle = tokio::spawn(register_actor.run());

    let (order_actor, order_client) = pizzeria::order_actor::new(menu_client);
    let actor_handle = tokio::spawn(order_actor.run(register_client.clone()));

    let err = order_client.place_order("Calzone").await.unwrap_err();
    assert!(matches!(err, OrderError::UnknownPizza(_)));

    assert_eq!(register_client.balance().await.unwrap(), 100.0);
    assert!(order_client.list().await.unwrap().is_empty());

    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
    drop(register_client);
    register_handle.await.unwrap();
}
