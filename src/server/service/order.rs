use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{menu::MenuRepository, order::OrderRepository, order_detail::OrderDetailRepository},
    error::order::{CancelRejection, OrderError, Stage, StageExt},
    model::order::{ConfirmedOrder, Order, OrderDetailLine, PlaceOrderParams, PlacedOrder},
    service::pricing::Pricing,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    pricing: Pricing,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, pricing: Pricing) -> Self {
        Self { db, pricing }
    }

    /// Places an order and its line items.
    ///
    /// The header is stored with the cart total first, then the total is recalculated from
    /// menu prices once the line items are in. All writes share one transaction; any error
    /// drops it and rolls everything back.
    ///
    /// # Returns
    /// - `Ok(PlacedOrder)` - Order committed with its recalculated total
    /// - `Err(OrderError::AmountOverflow)` - Cart or menu total does not fit in a decimal amount
    /// - `Err(OrderError::UnknownMenuItems)` - Cart references items missing from the menu
    /// - `Err(OrderError::Persistence)` - Database failure, tagged with the failing stage
    pub async fn place(&self, params: PlaceOrderParams) -> Result<PlacedOrder, OrderError> {
        let cart_total = params.cart_total(&self.pricing)?;

        let txn = self.db.begin().await.stage(Stage::PlaceOrder)?;
        let orders = OrderRepository::new(&txn);

        let order_no = orders
            .create(params.order_type, cart_total, Utc::now())
            .await
            .stage(Stage::PlaceOrder)?;

        let missing = MenuRepository::new(&txn)
            .find_missing(&params.item_nos())
            .await
            .stage(Stage::InsertOrderDetails)?;
        if !missing.is_empty() {
            return Err(OrderError::UnknownMenuItems(missing));
        }

        orders
            .insert_line_items(order_no, params.line_items())
            .await
            .stage(Stage::InsertOrderDetails)?;

        let lines = orders
            .get_priced_lines(order_no)
            .await
            .stage(Stage::CalculateOrderTotal)?;
        let total_amount = self
            .pricing
            .total(params.order_type, lines)
            .ok_or(OrderError::AmountOverflow)?;

        orders
            .set_total(order_no, total_amount)
            .await
            .stage(Stage::CalculateOrderTotal)?;

        txn.commit().await.stage(Stage::PlaceOrder)?;

        tracing::info!("Placed order {} with total {}", order_no, total_amount);

        Ok(PlacedOrder {
            order_no,
            total_amount,
        })
    }

    /// Confirms an order, adding the order type's surcharge to its stored total.
    ///
    /// The update is keyed on the order number only, so confirming twice adds the
    /// surcharge twice.
    ///
    /// # Returns
    /// - `Ok(ConfirmedOrder)` - Order confirmed with its new total
    /// - `Err(OrderError::NotFound)` - No order with that number
    /// - `Err(OrderError::CannotConfirm)` - The update matched no row
    /// - `Err(OrderError::AmountOverflow)` - Surcharged total does not fit in a decimal amount
    /// - `Err(OrderError::Persistence)` - Database failure
    pub async fn confirm(&self, order_no: i32) -> Result<ConfirmedOrder, OrderError> {
        let txn = self.db.begin().await.stage(Stage::ConfirmOrder)?;
        let orders = OrderRepository::new(&txn);

        let order = orders
            .get_by_id(order_no)
            .await
            .stage(Stage::ConfirmOrder)?
            .ok_or(OrderError::NotFound(order_no))?;

        let total_amount = self
            .pricing
            .confirmation_total(order.order_type, order.total_amount)
            .ok_or(OrderError::AmountOverflow)?;

        let updated = orders
            .confirm(order_no, total_amount)
            .await
            .stage(Stage::ConfirmOrder)?;
        if updated == 0 {
            return Err(OrderError::CannotConfirm(order_no));
        }

        txn.commit().await.stage(Stage::ConfirmOrder)?;

        tracing::info!("Confirmed order {} with total {}", order_no, total_amount);

        Ok(ConfirmedOrder {
            order_no,
            total_amount,
        })
    }

    /// Cancels a pending order.
    ///
    /// # Returns
    /// - `Ok(())` - Order moved from `Pending` to `Cancelled`
    /// - `Err(OrderError::CannotCancel)` - Order missing or no longer pending
    /// - `Err(OrderError::Persistence)` - Database failure
    pub async fn cancel(&self, order_no: i32) -> Result<(), OrderError> {
        let orders = OrderRepository::new(self.db);

        let updated = orders
            .cancel_pending(order_no)
            .await
            .stage(Stage::CancelOrder)?;

        if updated == 0 {
            let reason = match orders
                .get_by_id(order_no)
                .await
                .stage(Stage::CancelOrder)?
            {
                Some(order) => CancelRejection::NotPending(order.order_status),
                None => CancelRejection::Missing,
            };
            return Err(OrderError::CannotCancel { order_no, reason });
        }

        tracing::info!("Cancelled order {}", order_no);

        Ok(())
    }

    /// Gets all orders, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = OrderRepository::new(self.db)
            .get_all()
            .await
            .stage(Stage::FetchOrders)?;

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }

    /// Gets orders still awaiting confirmation, newest first.
    pub async fn get_pending(&self) -> Result<Vec<Order>, OrderError> {
        let orders = OrderRepository::new(self.db)
            .get_by_status(OrderStatus::Pending)
            .await
            .stage(Stage::FetchPendingOrders)?;

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }

    /// Gets the detail lines of one order. Unknown orders yield an empty list.
    pub async fn get_details(&self, order_no: i32) -> Result<Vec<OrderDetailLine>, OrderError> {
        let rows = OrderDetailRepository::new(self.db)
            .get_by_order(order_no)
            .await
            .stage(Stage::FetchOrderDetails)?;

        Ok(rows.into_iter().map(OrderDetailLine::from_row).collect())
    }
}
