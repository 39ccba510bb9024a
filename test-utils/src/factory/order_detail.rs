//! Order line item factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a line item for an existing order and menu item.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_no` - Order the line belongs to
/// - `item_no` - Menu item ordered
/// - `quantity` - Number of portions
///
/// # Returns
/// - `Ok(entity::order_details::Model)` - Created line item
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_detail(
    db: &DatabaseConnection,
    order_no: i32,
    item_no: i32,
    quantity: i32,
) -> Result<entity::order_details::Model, DbErr> {
    entity::order_details::ActiveModel {
        order_no: ActiveValue::Set(order_no),
        item_no: ActiveValue::Set(item_no),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
