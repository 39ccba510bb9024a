use super::*;

/// Tests that every order is returned as a domain model, newest first.
///
/// Expected: Ok with all orders sorted by date descending
#[tokio::test]
async fn returns_all_orders_newest_first() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Cancelled)
        .order_date(now - Duration::days(1))
        .build()
        .await
        .unwrap();
    let newer = factory::order::OrderFactory::new(db)
        .order_type(OrderType::Takeaway)
        .order_date(now)
        .build()
        .await
        .unwrap();

    let orders = OrderService::new(db, Pricing::default()).get_all().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_no, newer.order_no);
    assert_eq!(orders[0].order_type, OrderType::Takeaway);
    assert_eq!(orders[1].order_no, older.order_no);
    assert_eq!(orders[1].order_status, OrderStatus::Cancelled);

    Ok(())
}
