use super::*;

/// Tests summing confirmed orders of one day.
///
/// Verifies that pending and cancelled orders of the same day and confirmed orders of
/// neighbouring days are excluded.
///
/// Expected: Ok with revenue 35.50 from two orders, newest first
#[tokio::test]
async fn sums_confirmed_orders_of_the_day() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let midnight = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    let lunch = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .total_amount(Decimal::new(2500, 2))
        .order_date(midnight + Duration::hours(12))
        .build()
        .await
        .unwrap();
    let dinner = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .total_amount(Decimal::new(1050, 2))
        .order_date(midnight + Duration::hours(20))
        .build()
        .await
        .unwrap();
    for status in [OrderStatus::Pending, OrderStatus::Cancelled] {
        factory::order::OrderFactory::new(db)
            .status(status)
            .order_date(midnight + Duration::hours(13))
            .build()
            .await
            .unwrap();
    }
    for order_date in [midnight - Duration::hours(1), midnight + Duration::days(1)] {
        factory::order::OrderFactory::new(db)
            .status(OrderStatus::Confirmed)
            .order_date(order_date)
            .build()
            .await
            .unwrap();
    }

    let revenue = RevenueService::new(db).daily(day).await?;

    assert_eq!(revenue.total, Decimal::new(3550, 2));
    let order_nos: Vec<i32> = revenue
        .completed_orders
        .iter()
        .map(|o| o.order_no)
        .collect();
    assert_eq!(order_nos, vec![dinner.order_no, lunch.order_no]);

    Ok(())
}

/// Tests a day without confirmed orders.
///
/// Expected: Ok with zero revenue and no orders
#[tokio::test]
async fn returns_zero_without_orders() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::order::create_order(db).await.unwrap();

    let revenue = RevenueService::new(db)
        .daily(Utc::now().date_naive())
        .await?;

    assert_eq!(revenue.total, Decimal::ZERO);
    assert!(revenue.completed_orders.is_empty());

    Ok(())
}
