use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct MenuRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the item numbers from `item_nos` that have no menu entry, in input order.
    pub async fn find_missing(&self, item_nos: &[i32]) -> Result<Vec<i32>, DbErr> {
        if item_nos.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<i32> = entity::prelude::Menu::find()
            .select_only()
            .column(entity::menu::Column::ItemNo)
            .filter(entity::menu::Column::ItemNo.is_in(item_nos.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(item_nos
            .iter()
            .copied()
            .filter(|item_no| !existing.contains(item_no))
            .collect())
    }
}
