//! Feedback factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a star rating for an order.
pub async fn create_feedback(
    db: &DatabaseConnection,
    order_no: i32,
    stars: i32,
) -> Result<entity::feedback::Model, DbErr> {
    entity::feedback::ActiveModel {
        order_no: ActiveValue::Set(order_no),
        stars: ActiveValue::Set(stars),
        ..Default::default()
    }
    .insert(db)
    .await
}
