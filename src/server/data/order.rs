use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

/// Order header and line item queries.
///
/// Generic over the connection so every call can run inside a transaction.
pub struct OrderRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending order header and returns its generated order number.
    pub async fn create(
        &self,
        order_type: OrderType,
        total_amount: Decimal,
        order_date: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let order = entity::orders::ActiveModel {
            order_type: ActiveValue::Set(order_type),
            order_status: ActiveValue::Set(OrderStatus::Pending),
            total_amount: ActiveValue::Set(total_amount),
            order_date: ActiveValue::Set(order_date),
            ..Default::default()
        };

        let result = entity::prelude::Orders::insert(order).exec(self.db).await?;

        Ok(result.last_insert_id)
    }

    pub async fn get_by_id(&self, order_no: i32) -> Result<Option<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find_by_id(order_no)
            .one(self.db)
            .await
    }

    /// Gets all orders, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::orders::Model>, DbErr> {
        newest_first(entity::prelude::Orders::find())
            .all(self.db)
            .await
    }

    /// Gets all orders in the given status, newest first.
    pub async fn get_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        newest_first(
            entity::prelude::Orders::find()
                .filter(entity::orders::Column::OrderStatus.eq(status)),
        )
        .all(self.db)
        .await
    }

    /// Gets orders in the given status dated within `[start, end)`, newest first.
    pub async fn get_by_status_between(
        &self,
        status: OrderStatus,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        newest_first(
            entity::prelude::Orders::find()
                .filter(entity::orders::Column::OrderStatus.eq(status))
                .filter(entity::orders::Column::OrderDate.gte(start))
                .filter(entity::orders::Column::OrderDate.lt(end)),
        )
        .all(self.db)
        .await
    }

    /// Inserts all line items of an order in a single statement.
    ///
    /// `lines` are `(item_no, quantity)` pairs and must not repeat an item.
    pub async fn insert_line_items(
        &self,
        order_no: i32,
        lines: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        if lines.is_empty() {
            return Ok(());
        }

        let models = lines
            .iter()
            .map(|&(item_no, quantity)| entity::order_details::ActiveModel {
                order_no: ActiveValue::Set(order_no),
                item_no: ActiveValue::Set(item_no),
                quantity: ActiveValue::Set(quantity),
            });

        entity::prelude::OrderDetails::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Gets the `(menu price, quantity)` pair of every line item of an order.
    pub async fn get_priced_lines(&self, order_no: i32) -> Result<Vec<(Decimal, i32)>, DbErr> {
        entity::prelude::OrderDetails::find()
            .select_only()
            .column(entity::menu::Column::Price)
            .column(entity::order_details::Column::Quantity)
            .join(
                JoinType::InnerJoin,
                entity::order_details::Relation::Menu.def(),
            )
            .filter(entity::order_details::Column::OrderNo.eq(order_no))
            .into_tuple::<(Decimal, i32)>()
            .all(self.db)
            .await
    }

    /// Overwrites the stored total. Returns the number of rows updated.
    pub async fn set_total(&self, order_no: i32, total_amount: Decimal) -> Result<u64, DbErr> {
        let result = entity::prelude::Orders::update_many()
            .set(entity::orders::ActiveModel {
                total_amount: ActiveValue::Set(total_amount),
                ..Default::default()
            })
            .filter(entity::orders::Column::OrderNo.eq(order_no))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks an order confirmed with the given total, whatever its current status.
    ///
    /// Returns the number of rows updated.
    pub async fn confirm(&self, order_no: i32, total_amount: Decimal) -> Result<u64, DbErr> {
        let result = entity::prelude::Orders::update_many()
            .set(entity::orders::ActiveModel {
                order_status: ActiveValue::Set(OrderStatus::Confirmed),
                total_amount: ActiveValue::Set(total_amount),
                ..Default::default()
            })
            .filter(entity::orders::Column::OrderNo.eq(order_no))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels an order only if it is still pending.
    ///
    /// Returns the number of rows updated; zero when the order is missing or not pending.
    pub async fn cancel_pending(&self, order_no: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Orders::update_many()
            .set(entity::orders::ActiveModel {
                order_status: ActiveValue::Set(OrderStatus::Cancelled),
                ..Default::default()
            })
            .filter(entity::orders::Column::OrderNo.eq(order_no))
            .filter(entity::orders::Column::OrderStatus.eq(OrderStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn newest_first(select: Select<entity::prelude::Orders>) -> Select<entity::prelude::Orders> {
    select
        .order_by_desc(entity::orders::Column::OrderDate)
        .order_by_desc(entity::orders::Column::OrderNo)
}
