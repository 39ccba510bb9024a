use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::OrderNo))
                    .col(string_len(Orders::OrderType, 16))
                    .col(string_len(Orders::OrderStatus, 16).default("Pending"))
                    .col(decimal_len(Orders::TotalAmount, 10, 2).default(0))
                    .col(
                        timestamp_with_time_zone(Orders::OrderDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Both listing endpoints sort by date and the pending list filters by status
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_status_date")
                    .table(Orders::Table)
                    .col(Orders::OrderStatus)
                    .col(Orders::OrderDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderNo,
    OrderType,
    OrderStatus,
    TotalAmount,
    OrderDate,
}
