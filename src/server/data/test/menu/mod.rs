use crate::server::data::menu::MenuRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
