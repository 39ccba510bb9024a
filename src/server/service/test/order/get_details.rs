use super::*;

/// Tests that the UPI id is hidden for non-UPI payments.
///
/// Expected: Ok with `upi_id` removed from the cash payment row
#[tokio::test]
async fn hides_upi_id_for_cash_payment() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _) = factory::helpers::create_order_with_items(
        db,
        OrderType::DineIn,
        &[(Decimal::new(500, 2), 1)],
    )
    .await
    .unwrap();
    factory::payment::PaymentFactory::new(db, order.order_no)
        .method("Cash")
        .upi_id(Some("stale@upi".to_string()))
        .build()
        .await
        .unwrap();

    let lines = OrderService::new(db, Pricing::default())
        .get_details(order.order_no)
        .await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].row.payment_method.as_deref(), Some("Cash"));
    assert_eq!(lines[0].row.upi_id, None);

    Ok(())
}

/// Tests an order number that does not exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_missing_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lines = OrderService::new(db, Pricing::default())
        .get_details(999)
        .await?;

    assert!(lines.is_empty());

    Ok(())
}
