use entity::sea_orm_active_enums::OrderType;
use rust_decimal::Decimal;

/// Default takeaway surcharge in cents (15.00).
pub const DEFAULT_TAKEAWAY_SURCHARGE_CENTS: i64 = 1500;

/// Surcharge rules for order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub takeaway_surcharge: Decimal,
}

impl Pricing {
    pub fn new(takeaway_surcharge: Decimal) -> Self {
        Self { takeaway_surcharge }
    }

    /// Surcharge added for the given order type; zero for dine-in.
    pub fn surcharge_for(&self, order_type: OrderType) -> Decimal {
        match order_type {
            OrderType::Takeaway => self.takeaway_surcharge,
            OrderType::DineIn => Decimal::ZERO,
        }
    }

    /// Sum of `price * quantity` over the lines plus the order type's surcharge.
    ///
    /// Returns `None` when the total does not fit in a `Decimal`.
    pub fn total<I>(&self, order_type: OrderType, lines: I) -> Option<Decimal>
    where
        I: IntoIterator<Item = (Decimal, i32)>,
    {
        let subtotal = lines
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, (price, quantity)| {
                acc.checked_add(price.checked_mul(Decimal::from(quantity))?)
            })?;

        self.with_surcharge(order_type, subtotal)
    }

    pub fn with_surcharge(&self, order_type: OrderType, amount: Decimal) -> Option<Decimal> {
        amount.checked_add(self.surcharge_for(order_type))
    }

    /// Total stored when an order is confirmed.
    ///
    /// Adds the surcharge on top of the already stored total, so a takeaway order carries it
    /// twice after confirmation.
    pub fn confirmation_total(
        &self,
        order_type: OrderType,
        current_total: Decimal,
    ) -> Option<Decimal> {
        self.with_surcharge(order_type, current_total)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(Decimal::new(DEFAULT_TAKEAWAY_SURCHARGE_CENTS, 2))
    }
}
