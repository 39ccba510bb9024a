use super::*;

/// Tests filtering orders by status.
///
/// Verifies that only pending orders are returned when asking for `Pending`.
///
/// Expected: Ok with only the pending orders
#[tokio::test]
async fn returns_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::order::create_order(db).await?;
    factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .status(OrderStatus::Cancelled)
        .build()
        .await?;

    let orders = OrderRepository::new(db)
        .get_by_status(OrderStatus::Pending)
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_no, pending.order_no);

    Ok(())
}
