use super::*;

/// Tests cancelling a pending order.
///
/// Expected: Ok with status `Cancelled`
#[tokio::test]
async fn cancels_pending_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await.unwrap();

    OrderService::new(db, Pricing::default())
        .cancel(order.order_no)
        .await?;

    let stored = entity::prelude::Orders::find_by_id(order.order_no)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.order_status, OrderStatus::Cancelled);

    Ok(())
}

/// Tests cancelling a confirmed order.
///
/// Expected: Err(CannotCancel) naming the current status, with the order unchanged
#[tokio::test]
async fn rejects_confirmed_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::OrderFactory::new(db)
        .status(OrderStatus::Confirmed)
        .build()
        .await
        .unwrap();

    let result = OrderService::new(db, Pricing::default())
        .cancel(order.order_no)
        .await;

    assert!(matches!(
        result,
        Err(OrderError::CannotCancel {
            reason: CancelRejection::NotPending(OrderStatus::Confirmed),
            ..
        })
    ));

    let stored = entity::prelude::Orders::find_by_id(order.order_no)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.order_status, OrderStatus::Confirmed);

    Ok(())
}

/// Tests cancelling an order twice.
///
/// Expected: Ok the first time, Err(CannotCancel) reporting `Cancelled` the second time
#[tokio::test]
async fn rejects_second_cancel() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order(db).await.unwrap();

    let service = OrderService::new(db, Pricing::default());
    service.cancel(order.order_no).await?;
    let result = service.cancel(order.order_no).await;

    assert!(matches!(
        result,
        Err(OrderError::CannotCancel {
            reason: CancelRejection::NotPending(OrderStatus::Cancelled),
            ..
        })
    ));

    Ok(())
}

/// Tests cancelling an order that does not exist.
///
/// Expected: Err(CannotCancel) with `Missing`
#[tokio::test]
async fn rejects_missing_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db, Pricing::default()).cancel(999).await;

    assert!(matches!(
        result,
        Err(OrderError::CannotCancel {
            order_no: 999,
            reason: CancelRejection::Missing,
        })
    ));

    Ok(())
}
