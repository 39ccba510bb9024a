use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::PaymentId))
                    .col(integer(Payment::OrderNo))
                    .col(string(Payment::PaymentStatus))
                    .col(string(Payment::PaymentMethod))
                    .col(
                        timestamp_with_time_zone(Payment::PaymentTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Payment::UpiId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_order_no")
                            .from(Payment::Table, Payment::OrderNo)
                            .to(Orders::Table, Orders::OrderNo)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    PaymentId,
    OrderNo,
    PaymentStatus,
    PaymentMethod,
    PaymentTime,
    UpiId,
}
