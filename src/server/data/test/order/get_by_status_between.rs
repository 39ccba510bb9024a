use super::*;

/// Tests the date window filter.
///
/// Verifies that the window includes its start, excludes its end, and ignores orders in
/// other statuses.
///
/// Expected: Ok with the confirmed orders inside the window, newest first
#[tokio::test]
async fn returns_orders_within_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(1);

    let at_start = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .order_date(start)
        .build()
        .await?;
    let evening = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .order_date(start + Duration::hours(20))
        .build()
        .await?;
    // Outside the window
    factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .order_date(end)
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .order_date(start - Duration::minutes(1))
        .build()
        .await?;
    // Inside the window but still pending
    factory::order::OrderFactory::new(db)
        .order_date(start + Duration::hours(12))
        .build()
        .await?;

    let orders = OrderRepository::new(db)
        .get_by_status_between(OrderStatus::Confirmed, start, end)
        .await?;

    let order_nos: Vec<i32> = orders.iter().map(|o| o.order_no).collect();
    assert_eq!(order_nos, vec![evening.order_no, at_start.order_no]);

    Ok(())
}
