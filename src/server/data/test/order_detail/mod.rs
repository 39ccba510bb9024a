use crate::server::data::order_detail::OrderDetailRepository;
use entity::sea_orm_active_enums::OrderType;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
