//! Payment factory for creating test payment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let payment = PaymentFactory::new(&db, order.order_no)
///     .method("UPI")
///     .upi_id(Some("guest@upi".to_string()))
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    order_no: i32,
    status: String,
    method: String,
    payment_time: DateTime<Utc>,
    upi_id: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - status: `"Paid"`
    /// - method: `"Cash"`
    /// - payment_time: now
    /// - upi_id: `None`
    pub fn new(db: &'a DatabaseConnection, order_no: i32) -> Self {
        Self {
            db,
            order_no,
            status: "Paid".to_string(),
            method: "Cash".to_string(),
            payment_time: Utc::now(),
            upi_id: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn upi_id(mut self, upi_id: Option<String>) -> Self {
        self.upi_id = upi_id;
        self
    }

    /// Inserts the payment into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            order_no: ActiveValue::Set(self.order_no),
            payment_status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(self.method),
            payment_time: ActiveValue::Set(self.payment_time),
            upi_id: ActiveValue::Set(self.upi_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cash payment for an order.
pub async fn create_payment(
    db: &DatabaseConnection,
    order_no: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, order_no).build().await
}
