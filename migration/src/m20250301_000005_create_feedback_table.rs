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
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::FeedbackId))
                    .col(integer(Feedback::OrderNo))
                    .col(integer(Feedback::Stars))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_order_no")
                            .from(Feedback::Table, Feedback::OrderNo)
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
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    FeedbackId,
    OrderNo,
    Stars,
}
