use chrono::{Duration, NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::OrderRepository,
    error::order::{OrderError, Stage, StageExt},
    model::{order::Order, revenue::DailyRevenue},
};

pub struct RevenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Revenue from orders currently `Confirmed` that were placed on the given UTC day.
    pub async fn daily(&self, day: NaiveDate) -> Result<DailyRevenue, OrderError> {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);

        let orders = OrderRepository::new(self.db)
            .get_by_status_between(OrderStatus::Confirmed, start, end)
            .await
            .stage(Stage::DailyRevenue)?;

        Ok(DailyRevenue::from_orders(
            orders.into_iter().map(Order::from_entity).collect(),
        ))
    }
}
