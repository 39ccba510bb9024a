use super::*;

/// Tests reading line items with their menu prices.
///
/// Expected: Ok with (price, quantity) pairs for the order only
#[tokio::test]
async fn returns_menu_price_and_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _) = factory::helpers::create_order_with_items(
        db,
        OrderType::DineIn,
        &[(Decimal::new(500, 2), 2), (Decimal::new(350, 2), 1)],
    )
    .await?;
    // Another order's lines must not leak in
    factory::helpers::create_order_with_items(db, OrderType::DineIn, &[(Decimal::new(900, 2), 4)])
        .await?;

    let mut lines = OrderRepository::new(db)
        .get_priced_lines(order.order_no)
        .await?;
    lines.sort_by_key(|(_, quantity)| *quantity);

    assert_eq!(
        lines,
        vec![(Decimal::new(350, 2), 1), (Decimal::new(500, 2), 2)]
    );

    Ok(())
}

/// Tests an order with no line items.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await?;

    let lines = OrderRepository::new(db)
        .get_priced_lines(order.order_no)
        .await?;

    assert!(lines.is_empty());

    Ok(())
}
