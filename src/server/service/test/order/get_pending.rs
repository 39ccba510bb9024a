use super::*;

/// Tests that only orders awaiting confirmation are returned.
///
/// Expected: Ok with pending orders only
#[tokio::test]
async fn returns_only_pending_orders() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::order::create_order(db).await.unwrap();
    let confirmed = factory::order::create_order(db).await.unwrap();
    let cancelled = factory::order::create_order(db).await.unwrap();

    let service = OrderService::new(db, Pricing::default());
    service.confirm(confirmed.order_no).await?;
    service.cancel(cancelled.order_no).await?;

    let orders = service.get_pending().await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_no, pending.order_no);
    assert_eq!(orders[0].order_status, OrderStatus::Pending);

    Ok(())
}
