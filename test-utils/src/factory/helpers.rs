//! Shared helper utilities for factory methods.

use entity::sea_orm_active_enums::OrderType;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending order together with one menu item and one line item per
/// `(price, quantity)` pair.
///
/// The order's stored total is left at the factory default; callers that care about the
/// total should set it explicitly with `OrderFactory`.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_type` - Type of the created order
/// - `lines` - Menu price and ordered quantity for each line
///
/// # Returns
/// - `Ok((order, menu_items))` - Created order and the menu items in `lines` order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    order_type: OrderType,
    lines: &[(Decimal, i32)],
) -> Result<(entity::orders::Model, Vec<entity::menu::Model>), DbErr> {
    let order = crate::factory::order::OrderFactory::new(db)
        .order_type(order_type)
        .build()
        .await?;

    let mut items = Vec::with_capacity(lines.len());
    for (price, quantity) in lines {
        let item = crate::factory::menu_item::create_menu_item_with_price(db, *price).await?;
        crate::factory::order_detail::create_order_detail(
            db,
            order.order_no,
            item.item_no,
            *quantity,
        )
        .await?;
        items.push(item);
    }

    Ok((order, items))
}
