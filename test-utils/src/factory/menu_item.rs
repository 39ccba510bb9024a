//! Menu item factory for creating test menu entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let item = MenuItemFactory::new(&db)
///     .name("Masala Dosa")
///     .price(Decimal::new(8050, 2))
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: Decimal,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Menu Item {id}"` where id is auto-incremented
    /// - price: `5.00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Menu Item {}", next_id()),
            price: Decimal::new(500, 2),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Inserts the menu item into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu::Model)` - Created menu entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        entity::menu::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values.
pub async fn create_menu_item(db: &DatabaseConnection) -> Result<entity::menu::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}

/// Creates a menu item with a specific price.
pub async fn create_menu_item_with_price(
    db: &DatabaseConnection,
    price: Decimal,
) -> Result<entity::menu::Model, DbErr> {
    MenuItemFactory::new(db).price(price).build().await
}
