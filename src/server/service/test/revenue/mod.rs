use crate::server::{error::order::OrderError, service::revenue::RevenueService};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod daily;
