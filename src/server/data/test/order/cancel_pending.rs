use super::*;

/// Tests cancelling a pending order.
///
/// Expected: Ok with one row updated and status `Cancelled`
#[tokio::test]
async fn cancels_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.cancel_pending(order.order_no).await?;

    assert_eq!(updated, 1);
    let order = repo.get_by_id(order.order_no).await?.unwrap();
    assert_eq!(order.order_status, OrderStatus::Cancelled);

    Ok(())
}

/// Tests that confirmed and cancelled orders are left untouched.
///
/// Expected: Ok with zero rows updated and statuses unchanged
#[tokio::test]
async fn leaves_non_pending_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let confirmed = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .build()
        .await?;
    let cancelled = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Cancelled)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    assert_eq!(repo.cancel_pending(confirmed.order_no).await?, 0);
    assert_eq!(repo.cancel_pending(cancelled.order_no).await?, 0);
    assert_eq!(
        repo.get_by_id(confirmed.order_no).await?.unwrap().order_status,
        OrderStatus::Confirmed
    );

    Ok(())
}

/// Tests cancelling an order that does not exist.
///
/// Expected: Ok with zero rows updated
#[tokio::test]
async fn updates_nothing_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = OrderRepository::new(db).cancel_pending(999).await?;

    assert_eq!(updated, 0);

    Ok(())
}
