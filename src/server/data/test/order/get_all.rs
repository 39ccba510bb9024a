use super::*;

/// Tests that orders come back newest first.
///
/// Expected: Ok with orders sorted by date descending
#[tokio::test]
async fn returns_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::order::OrderFactory::new(db)
        .order_date(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::order::OrderFactory::new(db)
        .order_date(now)
        .build()
        .await?;
    let middle = factory::order::OrderFactory::new(db)
        .order_date(now - Duration::hours(1))
        .build()
        .await?;

    let orders = OrderRepository::new(db).get_all().await?;

    let order_nos: Vec<i32> = orders.iter().map(|o| o.order_no).collect();
    assert_eq!(
        order_nos,
        vec![newest.order_no, middle.order_no, older.order_no]
    );

    Ok(())
}

/// Tests that orders with the same date are ordered by order number descending.
///
/// Expected: Ok with the later order number first
#[tokio::test]
async fn breaks_date_ties_by_order_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order_date = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let first = factory::order::OrderFactory::new(db)
        .order_date(order_date)
        .build()
        .await?;
    let second = factory::order::OrderFactory::new(db)
        .order_date(order_date)
        .build()
        .await?;

    let orders = OrderRepository::new(db).get_all().await?;

    assert_eq!(orders[0].order_no, second.order_no);
    assert_eq!(orders[1].order_no, first.order_no);

    Ok(())
}

/// Tests fetching from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = OrderRepository::new(db).get_all().await?;

    assert!(orders.is_empty());

    Ok(())
}
