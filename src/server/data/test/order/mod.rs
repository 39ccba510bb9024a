use crate::server::data::order::OrderRepository;
use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod cancel_pending;
mod get_all;
mod get_by_status;
mod get_by_status_between;
mod get_priced_lines;
mod insert_line_items;
