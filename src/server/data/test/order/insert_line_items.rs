use super::*;

/// Tests inserting several line items at once.
///
/// Expected: Ok with one order_details row per line
#[tokio::test]
async fn inserts_all_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await?;
    let dosa = factory::menu_item::create_menu_item(db).await?;
    let lassi = factory::menu_item::create_menu_item(db).await?;

    OrderRepository::new(db)
        .insert_line_items(order.order_no, &[(dosa.item_no, 2), (lassi.item_no, 1)])
        .await?;

    let lines = entity::prelude::OrderDetails::find().all(db).await?;
    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .any(|l| l.item_no == dosa.item_no && l.quantity == 2));
    assert!(lines
        .iter()
        .any(|l| l.item_no == lassi.item_no && l.quantity == 1));

    Ok(())
}

/// Tests that an empty line list is a no-op.
///
/// Expected: Ok with no rows inserted
#[tokio::test]
async fn ignores_empty_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await?;

    OrderRepository::new(db)
        .insert_line_items(order.order_no, &[])
        .await?;

    assert_eq!(entity::prelude::OrderDetails::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an item already on the order is rejected by the composite key.
///
/// Expected: Err because (order_no, item_no) already exists
#[tokio::test]
async fn fails_on_duplicate_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await?;
    let dosa = factory::menu_item::create_menu_item(db).await?;
    factory::order_detail::create_order_detail(db, order.order_no, dosa.item_no, 1).await?;

    let result = OrderRepository::new(db)
        .insert_line_items(order.order_no, &[(dosa.item_no, 3)])
        .await;

    assert!(result.is_err());

    Ok(())
}
