use rust_decimal::Decimal;

use crate::{model::revenue::DailyRevenueDto, server::model::order::Order};

/// Revenue of confirmed orders for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub total: Decimal,
    /// Newest first.
    pub completed_orders: Vec<Order>,
}

impl DailyRevenue {
    /// Sums the totals of the given orders; zero when there are none.
    pub fn from_orders(completed_orders: Vec<Order>) -> Self {
        let total = completed_orders.iter().map(|order| order.total_amount).sum();
        Self {
            total,
            completed_orders,
        }
    }

    pub fn into_dto(self) -> DailyRevenueDto {
        DailyRevenueDto {
            today_revenue: self.total,
            completed_orders: self
                .completed_orders
                .into_iter()
                .map(Order::into_dto)
                .collect(),
        }
    }
}
