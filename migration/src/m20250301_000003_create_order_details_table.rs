use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_menu_table::Menu, m20250301_000002_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetails::Table)
                    .if_not_exists()
                    .col(integer(OrderDetails::OrderNo))
                    .col(integer(OrderDetails::ItemNo))
                    .col(integer(OrderDetails::Quantity))
                    .primary_key(
                        Index::create()
                            .col(OrderDetails::OrderNo)
                            .col(OrderDetails::ItemNo),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_order_no")
                            .from(OrderDetails::Table, OrderDetails::OrderNo)
                            .to(Orders::Table, Orders::OrderNo)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_item_no")
                            .from(OrderDetails::Table, OrderDetails::ItemNo)
                            .to(Menu::Table, Menu::ItemNo)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderDetails {
    Table,
    OrderNo,
    ItemNo,
    Quantity,
}
