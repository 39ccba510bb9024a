use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::order::OrderDetailRow;

pub struct OrderDetailRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderDetailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the line items of one order joined with menu entries, payments and feedback.
    ///
    /// Payment and feedback are outer joined and come back as `None` when absent. An order
    /// without line items, or one that does not exist, yields no rows.
    pub async fn get_by_order(&self, order_no: i32) -> Result<Vec<OrderDetailRow>, DbErr> {
        use entity::{feedback, menu, order_details, orders, payment};

        entity::prelude::Orders::find()
            .select_only()
            .column(orders::Column::OrderNo)
            .column(orders::Column::OrderStatus)
            .column(orders::Column::OrderType)
            .column(orders::Column::TotalAmount)
            .column(orders::Column::OrderDate)
            .column(order_details::Column::ItemNo)
            .column(menu::Column::Name)
            .column(order_details::Column::Quantity)
            .column(menu::Column::Price)
            .column(payment::Column::PaymentId)
            .column(payment::Column::PaymentStatus)
            .column(payment::Column::PaymentMethod)
            .column(payment::Column::PaymentTime)
            .column(payment::Column::UpiId)
            .column_as(feedback::Column::Stars, "feedback_stars")
            .join(JoinType::InnerJoin, orders::Relation::OrderDetails.def())
            .join(JoinType::InnerJoin, order_details::Relation::Menu.def())
            .join(JoinType::LeftJoin, orders::Relation::Payment.def())
            .join(JoinType::LeftJoin, orders::Relation::Feedback.def())
            .filter(orders::Column::OrderNo.eq(order_no))
            .order_by_asc(order_details::Column::ItemNo)
            .into_model::<OrderDetailRow>()
            .all(self.db)
            .await
    }
}
